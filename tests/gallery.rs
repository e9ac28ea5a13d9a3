use std::fs;

use stackviz::{convert, evaluate, to_postfix_string};
use walkdir::WalkDir;

struct Case {
    infix:   String,
    postfix: String,
    result:  f64,
}

#[test]
fn gallery_cases_convert_and_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line, case) in parse_cases(&content) {
            count += 1;

            let postfix = to_postfix_string(&convert(&case.infix));
            assert_eq!(postfix, case.postfix, "{path:?} line {line}: wrong conversion");

            match evaluate(&case.postfix) {
                Ok(result) => {
                    assert_eq!(result.value, case.result, "{path:?} line {line}: wrong value");
                    assert_eq!(result.steps.len(), case.postfix.split_whitespace().count());
                },
                Err(e) => panic!("{path:?} line {line}: {} failed: {e}", case.postfix),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_cases(content: &str) -> Vec<(usize, Case)> {
    let mut cases = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('|').map(str::trim).collect();
        let [infix, postfix, result] = fields.as_slice() else {
            panic!("Malformed case on line {}: {line}", i + 1);
        };
        let result = result.parse()
                           .unwrap_or_else(|e| panic!("Bad result on line {}: {e}", i + 1));

        cases.push((i + 1,
                    Case { infix: (*infix).to_string(),
                           postfix: (*postfix).to_string(),
                           result }));
    }

    cases
}
