use super::*;

fn skill(name: &str, category: Option<&str>) -> Skill {
    Skill { name: name.to_owned(), icon: None, category: category.map(str::to_owned) }
}

#[test]
fn groups_keep_first_seen_order() {
    let groups = group_by_category(vec![
        skill("Rust", Some("Languages")),
        skill("Docker", Some("Tools")),
        skill("Go", Some("Languages")),
    ]);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0.as_deref(), Some("Languages"));
    let names: Vec<_> = groups[0].1.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Rust", "Go"]);
    assert_eq!(groups[1].0.as_deref(), Some("Tools"));
}

#[test]
fn uncategorized_skills_share_one_group() {
    let groups = group_by_category(vec![skill("Git", None), skill("Linux", None)]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, None);
    assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group_by_category(Vec::new()).is_empty());
}
