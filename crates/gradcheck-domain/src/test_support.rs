use crate::model::{CatalogStore, Course, Requirement, RequirementBlock};
use gradcheck_types::{CourseCode, StudentProfile};

pub fn course(code: &str, credits: u32) -> Course {
    Course {
        code: CourseCode::new(code),
        name: format!("{code} course"),
        credits,
        ..Course::default()
    }
}

pub fn req(name: &str, credits: u32) -> Requirement {
    Requirement::named(name, credits)
}

pub fn req_with_options(name: &str, credits: u32, options: &[&str]) -> Requirement {
    Requirement {
        options: Some(options.iter().map(|s| s.to_string()).collect()),
        ..Requirement::named(name, credits)
    }
}

pub fn req_with_prefixes(name: &str, credits: u32, prefixes: &[&str]) -> Requirement {
    Requirement {
        allowed_prefixes: Some(prefixes.iter().map(|s| s.to_string()).collect()),
        ..Requirement::named(name, credits)
    }
}

pub fn block(name: &str, requirements: Vec<Requirement>) -> RequirementBlock {
    RequirementBlock {
        name: name.to_string(),
        requirements,
    }
}

pub fn catalog(courses: Vec<Course>, blocks: Vec<RequirementBlock>) -> CatalogStore {
    let mut store = CatalogStore::default();
    for c in courses {
        store.insert_course(c);
    }
    for b in blocks {
        store.insert_block(b);
    }
    store
}

pub fn profile(done: &[&str]) -> StudentProfile {
    StudentProfile::new("2024-2025", done.iter().map(|s| s.to_string()).collect())
}
