use serde::Serialize as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::presence::Presence;

/// JSON with 4 space indentation.
pub fn to_json(presence: &Presence) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    presence.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

#[test]
fn four_space_indent() {
    let presence = Presence::from([("span".to_owned(), false), ("div".to_owned(), true)]);
    assert_eq!(
        to_json(&presence).unwrap(),
        "{\n    \"div\": true,\n    \"span\": false\n}"
    );
}

#[test]
fn empty_mapping() {
    assert_eq!(to_json(&Presence::new()).unwrap(), "{}");
}
