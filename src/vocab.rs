//! Well-known identifiers and vocabulary extension terms

use serde_json::{json, Map, Value};

/// Root data entity @id within a crate
pub const ROOT_ENTITY_ID: &str = "./";

/// Workflow testing vocabulary, for use as extension terms
/// https://github.com/ResearchObject/ro-terms/tree/master/test
pub fn testing_extra_terms() -> Map<String, Value> {
    let mut terms = Map::new();
    for (term, uri) in [
        ("TestSuite", "https://w3id.org/ro/terms/test#TestSuite"),
        ("TestInstance", "https://w3id.org/ro/terms/test#TestInstance"),
        ("TestService", "https://w3id.org/ro/terms/test#TestService"),
        ("TestDefinition", "https://w3id.org/ro/terms/test#TestDefinition"),
        ("PlanemoEngine", "https://w3id.org/ro/terms/test#PlanemoEngine"),
        ("JenkinsService", "https://w3id.org/ro/terms/test#JenkinsService"),
        ("TravisService", "https://w3id.org/ro/terms/test#TravisService"),
        ("GithubService", "https://w3id.org/ro/terms/test#GithubService"),
        ("instance", "https://w3id.org/ro/terms/test#instance"),
        ("runsOn", "https://w3id.org/ro/terms/test#runsOn"),
        ("resource", "https://w3id.org/ro/terms/test#resource"),
        ("definition", "https://w3id.org/ro/terms/test#definition"),
        ("engineVersion", "https://w3id.org/ro/terms/test#engineVersion"),
    ] {
        terms.insert(term.to_string(), json!(uri));
    }
    terms
}
