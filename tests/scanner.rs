use classweb::core::ProjectScanner;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "class Placeholder { }\n").unwrap();
}

#[test]
fn test_groups_files_by_nearest_project() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("repo");
    touch(&root, "Core/Core.csproj");
    touch(&root, "Core/Models/User.cs");
    touch(&root, "Core/Tests/Tests.csproj");
    touch(&root, "Core/Tests/UserTests.cs");
    touch(&root, "Web/Web.csproj");
    touch(&root, "Web/Program.cs");
    touch(&root, "Web/obj/Generated.cs");
    touch(&root, "Web/bin/Debug/Out.cs");
    touch(&root, ".git/hooks/Hook.cs");
    touch(&root, "loose.cs");
    touch(&root, "readme.txt");

    let projects = ProjectScanner::new().scan_directory(&root).unwrap();

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Core", "Tests", "Web", "repo"]);

    assert_eq!(projects[0].files, vec![root.join("Core/Models/User.cs")]);
    assert_eq!(projects[1].files, vec![root.join("Core/Tests/UserTests.cs")]);
    assert_eq!(projects[2].files, vec![root.join("Web/Program.cs")]);
    assert_eq!(projects[3].files, vec![root.join("loose.cs")]);
}

#[test]
fn test_files_are_listed_in_path_order() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("solo");
    touch(&root, "b.cs");
    touch(&root, "a.cs");
    touch(&root, "nested/c.cs");

    let projects = ProjectScanner::new().scan_directory(&root).unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "solo");
    assert_eq!(
        projects[0].files,
        vec![root.join("a.cs"), root.join("b.cs"), root.join("nested/c.cs")]
    );
}

#[test]
fn test_empty_directory_has_no_projects() {
    let temp = TempDir::new().unwrap();
    let projects = ProjectScanner::new().scan_directory(temp.path()).unwrap();
    assert!(projects.is_empty());
}

#[test]
fn test_rejects_non_directory_root() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "file.cs");
    let result = ProjectScanner::new().scan_directory(&temp.path().join("file.cs"));
    assert!(result.is_err());
}
