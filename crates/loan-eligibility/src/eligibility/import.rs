use std::io::Read;
use std::path::Path;

use super::domain::ApplicationForm;

#[derive(Debug)]
pub enum ApplicationImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ApplicationImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationImportError::Io(err) => write!(f, "failed to read applications: {}", err),
            ApplicationImportError::Csv(err) => write!(f, "invalid application CSV data: {}", err),
        }
    }
}

impl std::error::Error for ApplicationImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApplicationImportError::Io(err) => Some(err),
            ApplicationImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ApplicationImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ApplicationImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads application forms from a CSV export whose headers match the form fields.
pub struct ApplicationCsvImporter;

impl ApplicationCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ApplicationForm>, ApplicationImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicationForm>, ApplicationImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut forms = Vec::new();

        for record in csv_reader.deserialize::<ApplicationForm>() {
            forms.push(record?);
        }

        Ok(forms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::domain::{Collateral, EmploymentType, MaritalStatus};
    use std::io::Cursor;

    const HEADER: &str = "age,marital_status,dependents,employment_type,employment_tenure_months,has_recent_delinquency,monthly_income,monthly_expenses,credit_score,collateral,requested_amount,requested_term_months\n";

    #[test]
    fn parses_rows_with_padding() {
        let csv = format!(
            "{HEADER}30, single, 0, employed, 24, false, 3000, 1000, 700, none, 5000, 36\n45,married,2,self_employed,80,true,6200.5,900,790,property,20000,60\n"
        );

        let forms = ApplicationCsvImporter::from_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].marital_status, MaritalStatus::Single);
        assert_eq!(forms[0].requested_term_months, 36);
        assert_eq!(forms[1].employment_type, EmploymentType::SelfEmployed);
        assert_eq!(forms[1].collateral, Collateral::Property);
        assert!(forms[1].has_recent_delinquency);
        assert_eq!(forms[1].monthly_income, 6200.5);
    }

    #[test]
    fn rejects_unknown_employment_label() {
        let csv = format!("{HEADER}30,single,0,freelance,24,false,3000,1000,700,none,5000,36\n");

        let err = ApplicationCsvImporter::from_reader(Cursor::new(csv)).expect_err("bad label");

        assert!(matches!(err, ApplicationImportError::Csv(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = ApplicationCsvImporter::from_path("/nonexistent/applications.csv")
            .expect_err("file missing");

        assert!(matches!(err, ApplicationImportError::Io(_)));
        assert!(err.to_string().starts_with("failed to read applications"));
    }
}
