use anyhow::Context;
use gradcheck_render::{RenderableAudit, RenderableBlock, RenderableStatus};
use gradcheck_types::{AuditEnvelope, AuditStatus, SCHEMA_AUDIT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_AUDIT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_AUDIT_V1})");
    }
    serde_json::from_value(value).context("parse gradcheck audit report")
}

pub fn serialize_report(envelope: &AuditEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(envelope).context("serialize audit report")
}

pub fn to_renderable(envelope: &AuditEnvelope) -> RenderableAudit {
    let audit = &envelope.audit;
    RenderableAudit {
        catalog_year: audit.catalog_year.clone(),
        status: match envelope.status {
            AuditStatus::Complete => RenderableStatus::Complete,
            AuditStatus::Incomplete => RenderableStatus::Incomplete,
        },
        credits_done: audit.credits_done,
        credits_required: audit.credits_required,
        blocks: audit
            .blocks
            .iter()
            .map(|(name, b)| RenderableBlock {
                name: name.clone(),
                completed: b.completed.clone(),
                missing: b.missing.clone(),
                credits_done: b.credits_done,
                credits_required: b.credits_required,
            })
            .collect(),
        unrecognized_courses: envelope
            .diagnostics
            .unrecognized_courses
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        warnings: envelope
            .diagnostics
            .warnings
            .iter()
            .map(|w| w.message.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradcheck_types::{
        AuditDiagnostics, AuditReport, BlockStatus, CourseCode, ToolMeta,
    };
    use std::collections::BTreeMap;
    use time::macros::datetime;

    fn sample() -> AuditEnvelope {
        AuditEnvelope {
            schema: SCHEMA_AUDIT_V1.to_string(),
            tool: ToolMeta {
                name: "gradcheck".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2025-01-01 00:00:00 UTC),
            finished_at: datetime!(2025-01-01 00:00:01 UTC),
            status: AuditStatus::Incomplete,
            audit: AuditReport {
                catalog_year: "2024-2025".to_string(),
                credits_done: 6,
                credits_required: 127,
                blocks: BTreeMap::from([(
                    "Core".to_string(),
                    BlockStatus {
                        completed: vec!["CSCI 111".to_string()],
                        missing: vec!["CSCI 487".to_string()],
                        credits_required: 6,
                        credits_done: 3,
                    },
                )]),
            },
            diagnostics: AuditDiagnostics {
                unrecognized_courses: vec![CourseCode::new("HIST 999")],
                courses_loaded: 2,
                blocks_loaded: 1,
                catalog_fingerprint: "0".repeat(64),
                warnings: Vec::new(),
            },
        }
    }

    #[test]
    fn serialized_report_parses_back() {
        let env = sample();
        let bytes = serialize_report(&env).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\"started_at\": \"2025-01-01T00:00:00Z\""));
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, env);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema": "legacy.report.v1"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_carries_blocks_and_notes() {
        let r = to_renderable(&sample());
        assert_eq!(r.status, RenderableStatus::Incomplete);
        assert_eq!(r.blocks.len(), 1);
        assert_eq!(r.blocks[0].missing, vec!["CSCI 487"]);
        assert_eq!(r.unrecognized_courses, vec!["HIST 999"]);
    }
}
