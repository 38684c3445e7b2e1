/// Where the symptom catalog request stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    /// No request issued yet.
    #[default]
    NotRequested,
    Loading,
    /// Toggles reflect the catalog (possibly none when the field was absent).
    Loaded,
    /// The load failed; the form stays unusable for this session.
    Failed(String),
}

/// One checkbox in the symptom grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymptomToggle {
    /// Identifier sent to the backend.
    pub id: String,
    /// Title-cased display label.
    pub label: String,
    pub checked: bool,
}

/// Symptom grid contents. The checked toggles are the only record of the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymptomGridState {
    pub catalog: CatalogStatus,
    pub toggles: Vec<SymptomToggle>,
}

impl SymptomGridState {
    /// Identifiers of all checked toggles, in catalog order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.toggles
            .iter()
            .filter(|toggle| toggle.checked)
            .map(|toggle| toggle.id.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.toggles.iter().filter(|toggle| toggle.checked).count()
    }

    pub fn clear_checks(&mut self) {
        for toggle in &mut self.toggles {
            toggle.checked = false;
        }
    }
}
