//! Static paper corpora used across harnesses.

use paperscope_core::Paper;

/// The two-paper collection from the acceptance scenario.
pub const SCENARIO_JSON: &str = r#"[
  {
    "title": "ECG Study",
    "abstract_public": "deep learning on ECG",
    "uses_dl": "yes",
    "task": ["classification", "detection"]
  },
  {
    "title": "MRI Atlas",
    "abstract_public": "no DL used",
    "uses_dl": "no",
    "task": ["segmentation"]
  }
]"#;

/// A corpus with every data-shape irregularity the loader absorbs:
/// missing and `null` fields, scalar facets, booleans, numbers, `null`
/// sequence elements, falsy tag values and an empty pdf_url.
pub const CORPUS_IRREGULAR: &str = r#"[
  {
    "title": "Wearable EEG seizure detection",
    "abstract_public": "A lightweight CNN for seizure onset detection.",
    "pdf_url": "https://example.org/eeg.pdf",
    "signals": ["EEG"],
    "uses_dl": true,
    "dl_type": ["CNN"],
    "task": ["detection"],
    "context": ["wearable", "clinical"]
  },
  {
    "title": "Photoplethysmography heart-rate tracking",
    "abstract_public": null,
    "signals": ["PPG", null, "ECG"],
    "uses_dl": false,
    "task": "regression",
    "context": ""
  },
  {
    "title": "Ultrasound speckle reduction",
    "medical_imaging": ["Ultrasound"],
    "uses_dl": 0,
    "dl_type": null,
    "pdf_url": ""
  },
  {
    "title": "CT lung nodule segmentation",
    "abstract_public": "U-Net variants compared on LIDC.",
    "medical_imaging": ["CT"],
    "uses_dl": true,
    "dl_type": ["U-Net", "Transformer"],
    "task": ["segmentation", "detection"],
    "context": ["clinical"]
  },
  {
    "abstract_public": "A paper without a title."
  }
]"#;

/// The same scenario wrapped the way a browser bundle ships it.
pub fn scenario_bundle() -> String {
    format!("// generated\nwindow.papers = {SCENARIO_JSON};\n")
}

pub fn scenario_papers() -> Vec<Paper> {
    paperscope_data::parse_papers(SCENARIO_JSON).expect("scenario fixture is valid")
}

pub fn irregular_papers() -> Vec<Paper> {
    paperscope_data::parse_papers(CORPUS_IRREGULAR).expect("irregular fixture is valid")
}
