use mvre::RenamePair;

pub fn render_human(plan: &[RenamePair]) -> String {
    plan.iter()
        .map(|pair| pair.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(plan: &[RenamePair]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

/// The shell command equivalent to one move, as echoed in verbose mode.
pub fn move_command(pair: &RenamePair) -> String {
    format!("mv '{}' '{}'", pair.source, pair.destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Vec<RenamePair> {
        vec![
            RenamePair {
                source: "a1".into(),
                destination: "b1".into(),
            },
            RenamePair {
                source: "a2".into(),
                destination: "b2".into(),
            },
        ]
    }

    #[test]
    fn human_output_has_one_line_per_move() {
        assert_eq!(render_human(&plan()), "a1 -> b1\na2 -> b2");
    }

    #[test]
    fn json_output_is_an_array_of_pairs() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&plan()).unwrap()).unwrap();
        assert_eq!(json[1]["source"], "a2");
        assert_eq!(json[1]["destination"], "b2");
    }

    #[test]
    fn move_command_quotes_both_paths() {
        assert_eq!(move_command(&plan()[0]), "mv 'a1' 'b1'");
    }
}
