mod counter;
mod measurement;

pub use counter::SubmissionCounter;
pub use measurement::Measurement;

//Perceived temperature is stored but exposes no statistics endpoint, matching
//the original sensor server; don't add a variant here without a product decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Humidity,
    Temperature,
}

impl Field {
    pub fn extract<'a>(&self, measurement: &'a Measurement) -> &'a str {
        match self {
            Field::Humidity => &measurement.humidity,
            Field::Temperature => &measurement.temperature,
        }
    }
}
