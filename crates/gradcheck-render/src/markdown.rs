use crate::{RenderableAudit, RenderablePlanTerm, RenderableStatus};

pub fn render_markdown(audit: &RenderableAudit) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Degree audit: {}\n\n", audit.catalog_year));
    let status = match audit.status {
        RenderableStatus::Complete => "COMPLETE",
        RenderableStatus::Incomplete => "INCOMPLETE",
    };
    let blocks_complete = audit.blocks.iter().filter(|b| b.missing.is_empty()).count();
    out.push_str(&format!(
        "- Status: **{}**\n- Credits: {} / {}\n- Blocks complete: {} / {}\n\n",
        status,
        audit.credits_done,
        audit.credits_required,
        blocks_complete,
        audit.blocks.len()
    ));

    if !audit.unrecognized_courses.is_empty() {
        out.push_str(&format!(
            "> Note: not in catalog, no credit counted: {}\n\n",
            audit.unrecognized_courses.join(", ")
        ));
    }
    for w in &audit.warnings {
        out.push_str(&format!("> Warning: {}\n\n", w));
    }

    if audit.blocks.is_empty() {
        out.push_str("No requirement blocks.\n");
        return out;
    }

    for b in &audit.blocks {
        out.push_str(&format!("## {}\n\n", b.name));
        out.push_str(&format!(
            "- Credits: {} / {}\n",
            b.credits_done, b.credits_required
        ));
        out.push_str(&format!("- Completed: {}\n", list_or_none(&b.completed)));
        out.push_str(&format!("- Missing: {}\n\n", list_or_none(&b.missing)));
    }

    out
}

pub fn render_plan_markdown(terms: &[RenderablePlanTerm]) -> String {
    let mut out = String::from("# Four-year plan\n\n");

    if terms.is_empty() {
        out.push_str("No planned terms.\n");
        return out;
    }

    for t in terms {
        out.push_str(&format!("## {} ({} hours)\n\n", t.name, t.total_hours));
        if t.rows.is_empty() {
            out.push_str("No courses planned.\n\n");
            continue;
        }
        out.push_str("| Course | Hours |\n| --- | --- |\n");
        for r in &t.rows {
            out.push_str(&format!("| {} | {} |\n", r.course, r.hours));
        }
        out.push('\n');
    }

    out
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableBlock, RenderablePlanRow};

    fn block(name: &str, completed: &[&str], missing: &[&str], done: u32, req: u32) -> RenderableBlock {
        RenderableBlock {
            name: name.to_string(),
            completed: completed.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            credits_done: done,
            credits_required: req,
        }
    }

    #[test]
    fn renders_audit_with_blocks_and_notes() {
        let audit = RenderableAudit {
            catalog_year: "2024-2025".to_string(),
            status: RenderableStatus::Incomplete,
            credits_done: 10,
            credits_required: 120,
            blocks: vec![
                block("Core", &["CSCI 111"], &["CSCI 487"], 3, 6),
                block("Fine Arts", &["Fine Arts (THEA 101)"], &[], 3, 3),
            ],
            unrecognized_courses: vec!["HIST 999".to_string()],
            warnings: vec!["data/policies.json not found".to_string()],
        };

        insta::assert_snapshot!(render_markdown(&audit), @r"
        # Degree audit: 2024-2025

        - Status: **INCOMPLETE**
        - Credits: 10 / 120
        - Blocks complete: 1 / 2

        > Note: not in catalog, no credit counted: HIST 999

        > Warning: data/policies.json not found

        ## Core

        - Credits: 3 / 6
        - Completed: CSCI 111
        - Missing: CSCI 487

        ## Fine Arts

        - Credits: 3 / 3
        - Completed: Fine Arts (THEA 101)
        - Missing: none
        ");
    }

    #[test]
    fn renders_audit_without_blocks() {
        let audit = RenderableAudit {
            catalog_year: "2025-2026".to_string(),
            status: RenderableStatus::Complete,
            credits_done: 0,
            credits_required: 0,
            blocks: Vec::new(),
            unrecognized_courses: Vec::new(),
            warnings: Vec::new(),
        };
        let md = render_markdown(&audit);
        assert!(md.contains("Status: **COMPLETE**"));
        assert!(md.contains("Blocks complete: 0 / 0"));
        assert!(md.ends_with("No requirement blocks.\n"));
        assert!(!md.contains("> Note"));
    }

    #[test]
    fn renders_plan_table() {
        let terms = vec![
            RenderablePlanTerm {
                name: "Fall Year 1".to_string(),
                rows: vec![
                    RenderablePlanRow {
                        course: "CSCI 111".to_string(),
                        hours: 3,
                    },
                    RenderablePlanRow {
                        course: "MATH 261".to_string(),
                        hours: 4,
                    },
                ],
                total_hours: 7,
            },
            RenderablePlanTerm {
                name: "Summer".to_string(),
                rows: Vec::new(),
                total_hours: 0,
            },
        ];

        insta::assert_snapshot!(render_plan_markdown(&terms), @r"
        # Four-year plan

        ## Fall Year 1 (7 hours)

        | Course | Hours |
        | --- | --- |
        | CSCI 111 | 3 |
        | MATH 261 | 4 |

        ## Summer (0 hours)

        No courses planned.
        ");
    }

    #[test]
    fn renders_empty_plan() {
        assert_eq!(render_plan_markdown(&[]), "# Four-year plan\n\nNo planned terms.\n");
    }
}
