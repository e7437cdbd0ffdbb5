use std::path::Path;

fn main() {
    let corpus_path = Path::new("fixtures/corpus.json");
    validate_corpus_file(corpus_path);
    set_build_dependencies();
}

fn validate_corpus_file(corpus_path: &Path) {
    // Ensure corpus exists at build time
    assert!(
        corpus_path.exists(),
        "\n\nFIXTURE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the fixture corpus before building.\n",
        corpus_path.display()
    );

    let corpus_contents = std::fs::read_to_string(corpus_path).unwrap_or_else(|e| {
        panic!(
            "\n\nFIXTURE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            corpus_path.display()
        );
    });

    let corpus: serde_json::Value = serde_json::from_str(&corpus_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nFIXTURE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            corpus_path.display()
        );
    });

    validate_corpus_structure(&corpus);
}

fn validate_corpus_structure(corpus: &serde_json::Value) {
    assert!(
        corpus.is_object(),
        "\n\nFIXTURE BUILD ERROR: Root must be a JSON object\n"
    );
    assert!(
        corpus.get("version").and_then(serde_json::Value::as_str).is_some(),
        "\n\nFIXTURE BUILD ERROR: Missing string 'version' field\n"
    );

    let pairs = fixture_array(corpus, "pairs");
    let lists = fixture_array(corpus, "lists");

    for (i, pair) in pairs.iter().enumerate() {
        for side in ["a", "b"] {
            assert!(
                pair.get(side).and_then(serde_json::Value::as_str).is_some(),
                "\n\nFIXTURE BUILD ERROR: Pair {i} field '{side}' must be a string\n"
            );
        }
    }

    for (i, list) in lists.iter().enumerate() {
        for side in ["a", "b"] {
            let aliases = list
                .get(side)
                .and_then(serde_json::Value::as_array)
                .unwrap_or_else(|| {
                    panic!("\n\nFIXTURE BUILD ERROR: List {i} field '{side}' must be an array\n")
                });
            assert!(
                aliases.iter().all(serde_json::Value::is_string),
                "\n\nFIXTURE BUILD ERROR: List {i} field '{side}' must contain only strings\n"
            );
        }
    }

    assert!(
        !pairs.is_empty() || !lists.is_empty(),
        "\n\nFIXTURE BUILD ERROR: Corpus has no fixtures\n"
    );

    println!(
        "cargo:warning=Validated fixture corpus: {} pairs, {} alias lists",
        pairs.len(),
        lists.len()
    );
}

fn fixture_array<'a>(corpus: &'a serde_json::Value, field: &str) -> &'a [serde_json::Value] {
    match corpus.get(field) {
        None => &[],
        Some(value) => value.as_array().map(Vec::as_slice).unwrap_or_else(|| {
            panic!("\n\nFIXTURE BUILD ERROR: '{field}' must be an array\n");
        }),
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the corpus changes
    println!("cargo:rerun-if-changed=fixtures/corpus.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
