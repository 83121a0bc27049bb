use crate::{Result, Workout, read_package};

/// Raw readings of a single training as sent by sensors.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }

    pub fn read(&self) -> Result<Workout> {
        read_package(&self.code, &self.values)
    }
}

/// Packages used when no input is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read packages from headerless csv, one package per row:
///
/// ```notrust
/// SWM,720,1,80,25,40
/// RUN,15000,1,75
/// # comments are skipped
/// WLK,9000,1,75,180
/// ```
#[cfg(feature = "csv")]
pub fn read_packages(reader: impl std::io::Read) -> Result<Vec<Package>> {
    use crate::Error;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut packages = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row = record.position().map(|this| this.line()).unwrap_or_default();

        let mut fields = record.iter();
        let code = fields.next().unwrap_or_default();

        let values = fields
            .map(|value| {
                value.parse::<f64>().map_err(|_| Error::InvalidNumber {
                    row,
                    value: value.to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        packages.push(Package::new(code, values));
    }

    Ok(packages)
}
