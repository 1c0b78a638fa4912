//! Raw JSON records → canonical catalog model.
//!
//! Sources disagree on field names and value shapes. Each field has an ordered
//! list of fallbacks; the first usable one wins and nothing here returns an error.

use crate::text;
use gradcheck_domain::model::{Course, PlanRow, PlanTerm, Requirement, RequirementBlock, Term};
use gradcheck_domain::policy::AuditPolicy;
use gradcheck_types::CourseCode;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

const PREREQUISITE_KEYS: &[&str] = &["prerequisites", "prereq", "prerequisite"];
const UNNAMED_REQUIREMENT: &str = "Unnamed";

/// Course code: explicit `code`, else a code found in the title, else the whole title.
///
/// Returns `None` only when there is nothing to work with.
pub fn extract_code(raw_code: Option<&str>, title: Option<&str>) -> Option<CourseCode> {
    if let Some(code) = raw_code.map(str::trim).filter(|c| !c.is_empty()) {
        return Some(CourseCode::new(code));
    }
    let title = title.map(str::trim).filter(|t| !t.is_empty())?;
    match text::find_code_in_title(title) {
        Some(code) => Some(CourseCode::new(code)),
        None => Some(CourseCode::new(title)),
    }
}

/// Course name from a title with any leading code removed.
pub fn extract_name(title: &str) -> String {
    text::strip_code_prefix(title)
}

/// Credits for a course record. Numbers truncate; text goes through the phrase heuristics.
pub fn parse_credits(value: Option<&Value>) -> u32 {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(_)) => 0,
        Some(Value::Number(n)) => n.as_f64().map(text::truncate_credits).unwrap_or(0),
        Some(Value::String(s)) => text::parse_credits_text(s),
        Some(other) => text::parse_credits_text(&other.to_string()),
    }
}

/// Credits for a requirement record: whole numbers only, anything else is 0.
pub fn parse_requirement_credits(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else {
                n.as_f64().map(text::truncate_credits).unwrap_or(0)
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .ok()
            .map(|n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Prerequisites as an ordered list of clauses.
pub fn normalize_prerequisites(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => text::split_prerequisites(s),
        Some(Value::Number(n)) => text::split_prerequisites(&n.to_string()),
        _ => Vec::new(),
    }
}

/// Offered terms, or `None` when the record does not name any known term.
pub fn normalize_semesters(value: Option<&Value>) -> Option<BTreeSet<Term>> {
    let tokens: Vec<String> = match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => return None,
    };

    let terms: BTreeSet<Term> = tokens
        .iter()
        .flat_map(|t| t.split(|c: char| !c.is_alphabetic()))
        .filter_map(Term::from_token)
        .collect();

    if terms.is_empty() { None } else { Some(terms) }
}

pub fn normalize_attributes(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => BTreeSet::from([s.trim().to_string()]),
        _ => BTreeSet::new(),
    }
}

/// Normalize one course record. `key_hint` is the mapping key when the source
/// is an object keyed by code.
pub fn normalize_course(record: &Map<String, Value>, key_hint: Option<&str>) -> Option<Course> {
    let raw_code = non_empty_text(record.get("code"));
    let title = non_empty_text(record.get("title")).or_else(|| non_empty_text(record.get("name")));

    // A code inside the title beats the mapping key; the key beats the bare title.
    let code = match raw_code.as_deref() {
        Some(code) => Some(CourseCode::new(code)),
        None => title
            .as_deref()
            .and_then(text::find_code_in_title)
            .map(CourseCode::new)
            .or_else(|| key_hint.map(CourseCode::new).filter(|c| !c.is_empty()))
            .or_else(|| extract_code(None, title.as_deref())),
    }?;

    let title = title.unwrap_or_default();
    let name = non_empty_text(record.get("name"))
        .or_else(|| Some(extract_name(&title)).filter(|n| !n.is_empty()))
        .unwrap_or_else(|| title.clone());

    let prerequisites = PREREQUISITE_KEYS
        .iter()
        .map(|k| record.get(*k))
        .find(|v| is_present(*v))
        .flatten();

    Some(Course {
        code,
        name,
        credits: parse_credits(record.get("credits")),
        description: non_empty_text(record.get("description")).unwrap_or_default(),
        prerequisites: normalize_prerequisites(prerequisites),
        semester_offered: normalize_semesters(record.get("semester_offered")),
        attributes: normalize_attributes(record.get("attributes")),
    })
}

/// Normalize a course source document, in source order.
///
/// Accepted shapes: an array of records, `{ "courses": [...] }`, or an object
/// keyed by course code.
pub fn normalize_courses(doc: &Value) -> Vec<Course> {
    let mut out = Vec::new();
    match doc {
        Value::Array(items) => collect_courses(items.iter().map(|v| (None, v)), &mut out),
        Value::Object(obj) => match obj.get("courses") {
            Some(Value::Array(items)) => {
                collect_courses(items.iter().map(|v| (None, v)), &mut out)
            }
            _ => collect_courses(obj.iter().map(|(k, v)| (Some(k.as_str()), v)), &mut out),
        },
        _ => {}
    }
    out
}

fn collect_courses<'a, I>(records: I, out: &mut Vec<Course>)
where
    I: Iterator<Item = (Option<&'a str>, &'a Value)>,
{
    for (key, value) in records {
        let Some(record) = value.as_object() else {
            tracing::debug!(?key, "skipping non-object course record");
            continue;
        };
        match normalize_course(record, key) {
            Some(course) => out.push(course),
            None => tracing::debug!(?key, "skipping course record without code or title"),
        }
    }
}

/// Normalize one requirement. A bare string is taken as the requirement name.
pub fn normalize_requirement(value: &Value) -> Requirement {
    let Some(record) = value.as_object() else {
        let name = scalar_text(value)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNNAMED_REQUIREMENT.to_string());
        return Requirement::named(name, 0);
    };

    let name = non_empty_text(record.get("name"))
        .or_else(|| non_empty_text(record.get("course")))
        .unwrap_or_else(|| UNNAMED_REQUIREMENT.to_string());

    Requirement {
        name,
        credits: parse_requirement_credits(record.get("credits")),
        options: string_list(record.get("options")),
        allowed_prefixes: string_list(record.get("allowed_prefixes")),
        exclusions: raw(record.get("exclusions")),
        prerequisites: raw(record.get("prerequisites")),
        filter: raw(record.get("filter")),
        notes: record.get("notes").and_then(|v| match v {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }),
    }
}

/// Normalize the `blocks` mapping of a degree requirements document.
///
/// A block is either `{ "requirements": [...] }` or a bare array.
pub fn normalize_blocks(doc: &Value) -> BTreeMap<String, RequirementBlock> {
    let Some(blocks) = doc.get("blocks").and_then(Value::as_object) else {
        return BTreeMap::new();
    };

    blocks
        .iter()
        .map(|(name, block)| {
            let items = match block {
                Value::Array(items) => Some(items),
                Value::Object(obj) => obj.get("requirements").and_then(Value::as_array),
                _ => None,
            };
            let requirements = items
                .map(|items| items.iter().map(normalize_requirement).collect())
                .unwrap_or_default();
            (
                name.clone(),
                RequirementBlock {
                    name: name.clone(),
                    requirements,
                },
            )
        })
        .collect()
}

/// Program policy: `min_total_credits` under `policies` or at the top level.
pub fn normalize_policy(doc: &Value) -> AuditPolicy {
    let value = doc
        .get("policies")
        .and_then(|p| p.get("min_total_credits"))
        .or_else(|| doc.get("min_total_credits"));

    let min_total_credits = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|u| u32::try_from(u).unwrap_or(u32::MAX))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(text::truncate_credits)
            }),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    min_total_credits
        .map(AuditPolicy::with_min_total_credits)
        .unwrap_or_default()
}

/// Normalize a four-year plan document into ordered terms.
///
/// Accepted shapes: `{ "terms": [...] }`, `{ "plan": [...] }`, a bare array of
/// terms, or an object keyed by term name. A term is `{ name|term|semester,
/// courses|rows }`; a row is a code string or `{ course|code, hours|credits }`.
/// Missing hours are left at 0.
pub fn normalize_plan(doc: &Value) -> Vec<PlanTerm> {
    let terms = doc
        .get("terms")
        .or_else(|| doc.get("plan"))
        .and_then(Value::as_array)
        .or_else(|| doc.as_array());

    if let Some(terms) = terms {
        return terms
            .iter()
            .enumerate()
            .filter_map(|(i, t)| {
                let obj = t.as_object()?;
                let name = ["name", "term", "semester"]
                    .iter()
                    .find_map(|k| non_empty_text(obj.get(*k)))
                    .unwrap_or_else(|| format!("Term {}", i + 1));
                let rows = obj.get("courses").or_else(|| obj.get("rows"));
                Some(plan_term(name, rows))
            })
            .collect();
    }

    match doc.as_object() {
        Some(obj) => obj
            .iter()
            .filter(|(_, v)| v.is_array())
            .map(|(name, rows)| plan_term(name.clone(), Some(rows)))
            .collect(),
        None => Vec::new(),
    }
}

fn plan_term(name: String, rows: Option<&Value>) -> PlanTerm {
    let rows = rows
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(plan_row).collect())
        .unwrap_or_default();
    PlanTerm { name, rows }
}

fn plan_row(value: &Value) -> Option<PlanRow> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(PlanRow {
            course: s.trim().to_string(),
            hours: 0,
        }),
        Value::Object(obj) => {
            let course = non_empty_text(obj.get("course"))
                .or_else(|| non_empty_text(obj.get("code")))
                .or_else(|| non_empty_text(obj.get("name")))?;
            let hours = parse_credits(obj.get("hours").or_else(|| obj.get("credits")));
            Some(PlanRow { course, hours })
        }
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(scalar_text)
        .filter(|s| !s.trim().is_empty())
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        Some(Value::Array(items)) => Some(items.iter().filter_map(scalar_text).collect()),
        Some(Value::String(s)) => Some(vec![s.clone()]),
        _ => None,
    }
}

fn raw(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}

/// A field counts as present when it carries something: not null, blank, empty or false.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(_) => true,
    }
}
