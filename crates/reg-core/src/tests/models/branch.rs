use crate::Branch;

use std::str::FromStr;

#[test]
fn test_every_code_round_trips() {
    for branch in Branch::ALL {
        assert_eq!(Branch::from_str(branch.as_str()).unwrap(), branch);
    }
}

#[test]
fn test_from_str_rejects_unknown_code() {
    let result = Branch::from_str("chemical");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("chemical"));
}

#[test]
fn test_display_matches_code() {
    assert_eq!(Branch::Cse.to_string(), "cse");
    assert_eq!(Branch::Etc.to_string(), "etc");
}

#[test]
fn test_labels_are_human_readable() {
    assert_eq!(Branch::Cse.label(), "Computer Science");
    assert_eq!(Branch::Ae.label(), "Aerospace Engineering");
}

#[test]
fn test_serde_uses_lowercase_code() {
    let json = serde_json::to_string(&Branch::Ecse).unwrap();
    assert_eq!(json, "\"ecse\"");

    let branch: Branch = serde_json::from_str("\"me\"").unwrap();
    assert_eq!(branch, Branch::Me);
}
