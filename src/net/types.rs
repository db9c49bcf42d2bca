#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Envelope code for a successful response.
pub const CODE_OK: i32 = 0;

/// Envelope code the backend returns when the session is missing or expired.
pub const CODE_NOT_LOGGED_IN: i32 = 40100;

/// Response envelope every backend endpoint wraps its payload in.
///
/// `code == 0` means success; any other code carries an optional human
/// readable `message` and usually no `data`. Missing `data`/`message`
/// keys decode as `None` without demanding `T: Default`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response, `None` for any failure shape.
    pub fn into_data(self) -> Option<T> {
        if self.code == CODE_OK { self.data } else { None }
    }
}

/// A user account as the backend serializes it.
///
/// Optional fields tolerate older backend versions that omit them; a
/// missing `userRole` simply never matches a required role.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Account {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "userRole", default)]
    pub role: Option<String>,
}

/// A gallery picture summary for list views.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Picture {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub introduction: Option<String>,
}
