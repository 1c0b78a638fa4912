#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Complete,
    Incomplete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableBlock {
    pub name: String,
    pub completed: Vec<String>,
    pub missing: Vec<String>,
    pub credits_done: u32,
    pub credits_required: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableAudit {
    pub catalog_year: String,
    pub status: RenderableStatus,
    pub credits_done: u32,
    pub credits_required: u32,
    pub blocks: Vec<RenderableBlock>,
    pub unrecognized_courses: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePlanRow {
    pub course: String,
    pub hours: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePlanTerm {
    pub name: String,
    pub rows: Vec<RenderablePlanRow>,
    pub total_hours: u32,
}
