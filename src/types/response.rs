use serde::Serialize;

/// Uniform envelope around every mapped API result.
///
/// `data` is the mapped resource; the remaining fields are transport
/// metadata from the HTTP response.
#[derive(Debug, Clone, Serialize)]
pub struct CompaniesHouseResponse<T> {
    pub data: T,
    /// Value of the `ETag` response header, if sent
    pub etag: Option<String>,
    #[serde(serialize_with = "serialize_status")]
    pub status: http::StatusCode,
}

impl<T> CompaniesHouseResponse<T> {
    pub fn new(data: T, etag: Option<String>, status: http::StatusCode) -> Self {
        Self { data, etag, status }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

fn serialize_status<S: serde::Serializer>(
    status: &http::StatusCode,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
