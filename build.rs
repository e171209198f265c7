fn main() {
    // Validate embedded JSON tables at compile time.
    validate_table(
        "src/table/data/jis_x_0401_code.json",
        include_str!("src/table/data/jis_x_0401_code.json"),
    );
    validate_table(
        "src/table/data/jis_x_0401_name.json",
        include_str!("src/table/data/jis_x_0401_name.json"),
    );
}

fn validate_table(path: &str, content: &str) {
    println!("cargo:rerun-if-changed={path}");
    let parsed: Result<std::collections::HashMap<String, String>, _> =
        serde_json::from_str(content);
    match parsed {
        Ok(map) if map.is_empty() => panic!("{path} is an empty table"),
        Ok(_) => {}
        Err(e) => panic!("{path} is not a flat string-to-string JSON object: {e}"),
    }
}
