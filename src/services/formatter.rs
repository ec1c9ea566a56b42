use crate::models::reply::{
    AnalysisReport, Assessment, LabeledFields, MISSING_COMMENT, MISSING_RATING,
};

/// Splits every `label: value` line of a reply into a field. Lines without a
/// colon are dropped and a repeated label keeps its last value.
pub fn parse_labeled_lines(reply: &str) -> LabeledFields {
    let mut fields = LabeledFields::default();

    for line in reply.lines() {
        if let Some((label, value)) = line.split_once(':') {
            fields.0.insert(label.trim().to_string(), value.trim().to_string());
        }
    }

    fields
}

/// Section names in the order the analysis prompt asks for them.
pub const ANALYSIS_SECTIONS: [&str; 4] = [
    "Overall",
    "Technical Skills",
    "Communication Skills",
    "Problem Solving",
];

/// Reads the `<Section> Rating:` / `<Section> Comment:` lines of an analysis
/// reply. The first matching line wins; absent or blank fields fall back to
/// the `N/A` / `No comment provided` placeholders.
pub fn parse_analysis(reply: &str) -> AnalysisReport {
    let [overall, technical_skills, communication_skills, problem_solving] =
        ANALYSIS_SECTIONS.map(|section| assess(reply, section));

    AnalysisReport {
        overall,
        technical_skills,
        communication_skills,
        problem_solving,
    }
}

fn assess(reply: &str, section: &str) -> Assessment {
    Assessment {
        rating: find_prefixed(reply, &format!("{} Rating:", section))
            .unwrap_or_else(|| MISSING_RATING.to_string()),
        comment: find_prefixed(reply, &format!("{} Comment:", section))
            .unwrap_or_else(|| MISSING_COMMENT.to_string()),
    }
}

fn find_prefixed(reply: &str, prefix: &str) -> Option<String> {
    reply
        .lines()
        .find_map(|line| line.trim_start().strip_prefix(prefix))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
