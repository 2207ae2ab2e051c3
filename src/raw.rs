use serde::Deserialize;

/// A field that the upstream document parser delivers either as a number or
/// as its original text. Conversion and validation happen in the summarizer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPoint {
    pub lat: Option<RawField>,
    pub lon: Option<RawField>,
    pub ele: Option<RawField>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawWaypoint {
    pub lat: Option<RawField>,
    pub lon: Option<RawField>,
    pub ele: Option<RawField>,
    pub time: Option<String>,
    pub name: Option<String>,
    pub cmt: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub points: Vec<RawPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTrack {
    pub name: Option<String>,
    pub desc: Option<String>,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBounds {
    pub minlat: Option<RawField>,
    pub minlon: Option<RawField>,
    pub maxlat: Option<RawField>,
    pub maxlon: Option<RawField>,
}

/// Output of the upstream document parser, the input of this crate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDocument {
    pub bounds: Option<RawBounds>,
    #[serde(default)]
    pub tracks: Vec<RawTrack>,
    #[serde(default)]
    pub waypoints: Vec<RawWaypoint>,
}
