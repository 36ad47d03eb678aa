use std::fmt;

// ---------------------------------------------------------------------------
// Panel – one of the three prediction workflows
// ---------------------------------------------------------------------------

/// The prediction workflows offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Panel {
    #[default]
    Diabetes,
    Heart,
    Parkinsons,
}

impl Panel {
    /// All panels in sidebar order.
    pub const ALL: [Panel; 3] = [Panel::Diabetes, Panel::Heart, Panel::Parkinsons];

    /// Static description of this panel's form and model.
    pub fn spec(self) -> &'static PanelSpec {
        match self {
            Panel::Diabetes => &DIABETES,
            Panel::Heart => &HEART,
            Panel::Parkinsons => &PARKINSONS,
        }
    }

    /// Position in [`Panel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Panel::Diabetes => 0,
            Panel::Heart => 1,
            Panel::Parkinsons => 2,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

// ---------------------------------------------------------------------------
// PanelSpec – data-driven form definition
// ---------------------------------------------------------------------------

/// One input field: the label shown in the form and the column name used by
/// the training dataset (and by batch files).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub column: &'static str,
}

const fn field(label: &'static str, column: &'static str) -> Field {
    Field { label, column }
}

/// Immutable description of a panel.
#[derive(Debug, PartialEq, Eq)]
pub struct PanelSpec {
    /// Sidebar entry.
    pub name: &'static str,
    /// Heading above the form.
    pub title: &'static str,
    /// Ordered input fields; the model sees features in this order.
    pub fields: &'static [Field],
    /// Model file name inside the models directory.
    pub model_file: &'static str,
    pub button_label: &'static str,
    pub positive_message: &'static str,
    pub negative_message: &'static str,
}

impl PanelSpec {
    /// Number of features the panel's classifier expects.
    pub fn feature_count(&self) -> usize {
        self.fields.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.label)
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.column)
    }
}

pub static DIABETES: PanelSpec = PanelSpec {
    name: "Diabetes Prediction",
    title: "Diabetes Prediction using ML",
    fields: &[
        field("Number of Pregnancies", "Pregnancies"),
        field("Glucose Level", "Glucose"),
        field("Blood Pressure Value", "BloodPressure"),
        field("Skin Thickness Value", "SkinThickness"),
        field("Insulin Level", "Insulin"),
        field("BMI Value", "BMI"),
        field("Diabetes Pedigree Function Value", "DiabetesPedigreeFunction"),
        field("Age of the Person", "Age"),
    ],
    model_file: "diabetes_model.json",
    button_label: "Diabetes Test Result",
    positive_message: "The person is diabetic",
    negative_message: "The person is not diabetic",
};

pub static HEART: PanelSpec = PanelSpec {
    name: "Heart Disease Prediction",
    title: "Heart Disease Prediction using ML",
    fields: &[
        field("Age", "age"),
        field("Sex (1=Male, 0=Female)", "sex"),
        field("Chest Pain Type", "cp"),
        field("Resting Blood Pressure", "trestbps"),
        field("Serum Cholesterol in mg/dl", "chol"),
        field("Fasting Blood Sugar > 120 mg/dl (1=True, 0=False)", "fbs"),
        field("Resting Electrocardiographic Results", "restecg"),
        field("Maximum Heart Rate Achieved", "thalach"),
        field("Exercise Induced Angina (1=Yes, 0=No)", "exang"),
        field("ST Depression Induced by Exercise", "oldpeak"),
        field("Slope of the Peak Exercise ST Segment", "slope"),
        field("Major Vessels Colored by Fluoroscopy", "ca"),
        field("Thal (0=Normal, 1=Fixed Defect, 2=Reversible Defect)", "thal"),
    ],
    model_file: "heart_disease_model.json",
    button_label: "Heart Disease Test Result",
    positive_message: "The person has heart disease",
    negative_message: "The person does not have heart disease",
};

// The voice-measurement labels double as dataset column names.
pub static PARKINSONS: PanelSpec = PanelSpec {
    name: "Parkinsons Prediction",
    title: "Parkinson's Disease Prediction using ML",
    fields: &[
        field("MDVP:Fo(Hz)", "MDVP:Fo(Hz)"),
        field("MDVP:Fhi(Hz)", "MDVP:Fhi(Hz)"),
        field("MDVP:Flo(Hz)", "MDVP:Flo(Hz)"),
        field("MDVP:Jitter(%)", "MDVP:Jitter(%)"),
        field("MDVP:Jitter(Abs)", "MDVP:Jitter(Abs)"),
        field("MDVP:RAP", "MDVP:RAP"),
        field("MDVP:PPQ", "MDVP:PPQ"),
        field("Jitter:DDP", "Jitter:DDP"),
        field("MDVP:Shimmer", "MDVP:Shimmer"),
        field("MDVP:Shimmer(dB)", "MDVP:Shimmer(dB)"),
        field("Shimmer:APQ3", "Shimmer:APQ3"),
        field("Shimmer:APQ5", "Shimmer:APQ5"),
        field("MDVP:APQ", "MDVP:APQ"),
        field("Shimmer:DDA", "Shimmer:DDA"),
        field("NHR", "NHR"),
        field("HNR", "HNR"),
        field("RPDE", "RPDE"),
        field("DFA", "DFA"),
        field("Spread1", "spread1"),
        field("Spread2", "spread2"),
        field("D2", "D2"),
        field("PPE", "PPE"),
    ],
    model_file: "parkinsons_model.json",
    button_label: "Parkinson's Test Result",
    positive_message: "The person has Parkinson's disease",
    negative_message: "The person does not have Parkinson's disease",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_counts() {
        assert_eq!(Panel::Diabetes.spec().feature_count(), 8);
        assert_eq!(Panel::Heart.spec().feature_count(), 13);
        assert_eq!(Panel::Parkinsons.spec().feature_count(), 22);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, panel) in Panel::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
        }
        assert_eq!(Panel::default(), Panel::Diabetes);
    }

    #[test]
    fn test_model_files_are_distinct() {
        let files: std::collections::BTreeSet<_> =
            Panel::ALL.iter().map(|p| p.spec().model_file).collect();
        assert_eq!(files.len(), 3);
    }
}
