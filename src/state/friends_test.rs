use super::*;

fn friend(id: &str, name: &str) -> Friend {
    Friend {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

// =============================================================
// Display ordering
// =============================================================

#[test]
fn sorted_by_name_is_ascending() {
    let list = vec![friend("3", "Nadia"), friend("1", "alice"), friend("2", "Bruno")];
    let names: Vec<_> = sorted_by_name(&list).into_iter().map(|f| f.name).collect();
    assert_eq!(names, ["alice", "Bruno", "Nadia"]);
}

#[test]
fn sorted_by_name_ignores_case() {
    let list = vec![friend("1", "zoe"), friend("2", "Alice"), friend("3", "bruno")];
    let names: Vec<_> = sorted_by_name(&list).into_iter().map(|f| f.name).collect();
    assert_eq!(names, ["Alice", "bruno", "zoe"]);
}

#[test]
fn sorted_by_name_leaves_input_untouched() {
    let list = vec![friend("1", "b"), friend("2", "a")];
    let _ = sorted_by_name(&list);
    assert_eq!(list[0].name, "b");
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_by_id_matches_exactly() {
    let list = vec![friend("f-1", "Nadia"), friend("f-2", "Bruno")];
    assert_eq!(find_by_id(&list, "f-2").map(|f| f.name.as_str()), Some("Bruno"));
    assert!(find_by_id(&list, "f-3").is_none());
}

// =============================================================
// Avatar initials
// =============================================================

#[test]
fn initials_from_first_and_last_word() {
    assert_eq!(initials("Nadia Benali"), "NB");
    assert_eq!(initials("Jean Marc du Pont"), "JP");
}

#[test]
fn initials_single_word_uses_one_letter() {
    assert_eq!(initials("omar"), "O");
}

#[test]
fn initials_blank_is_question_mark() {
    assert_eq!(initials("   "), "?");
    assert_eq!(initials(""), "?");
}
