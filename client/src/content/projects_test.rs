use super::*;

#[test]
fn every_project_has_a_cover() {
    for project in &PROJECTS {
        assert!(project.cover().is_some(), "{}", project.title);
        assert!(!project.tech.is_empty());
    }
}

#[test]
fn thumbnails_cap_at_two() {
    let proofx = &PROJECTS[1];
    assert_eq!(proofx.thumbnails().len(), 2);
    assert!(proofx.has_gallery());

    let single = &PROJECTS[4];
    assert_eq!(single.thumbnails(), &["/projects/ordexecoding.png"]);
    assert!(!single.has_gallery());
}

#[test]
fn two_screenshots_fit_inline_without_gallery() {
    let secure = &PROJECTS[0];
    assert_eq!(secure.thumbnails().len(), 2);
    assert!(!secure.has_gallery());
}
