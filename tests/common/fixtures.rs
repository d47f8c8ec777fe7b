//! Catalog fixtures shared across CLI tests.

/// Two working mapsets plus one whose queries fail.
///
/// `user1` is the current mapset, listed last in the search path.
pub const CATALOG_WITH_BROKEN_MAPSET: &str = r#"
current_mapset = "user1"
mapsets = ["PERMANENT", "broken", "user1"]
failing = ["broken"]

[elements.PERMANENT]
rast = ["elevation", "aspect"]
vect = ["roads", "streams"]
region = ["default"]

[elements.user1]
rast = ["slope"]
vect = ["roads"]
"#;
