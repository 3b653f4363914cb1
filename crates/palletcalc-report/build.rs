use std::{env, fmt::Write as _, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let test_data = manifest_dir.join("test-data");
    println!("cargo:rerun-if-changed={}", test_data.display());

    let mut machines = Vec::new();
    for entry in fs::read_dir(&test_data)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            println!("cargo:rerun-if-changed={}", path.display());
            machines.push(path);
        }
    }
    machines.sort();

    let mut buffer = String::new();
    writeln!(buffer, "use insta::assert_snapshot;")?;
    writeln!(
        buffer,
        "use crate::testing::{{snapshot_csv_from_str, snapshot_text_from_str}};"
    )?;
    writeln!(buffer)?;

    for path in machines {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let ident: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        for (kind, helper) in [
            ("report", "snapshot_text_from_str"),
            ("csv", "snapshot_csv_from_str"),
        ] {
            writeln!(buffer, "#[test]")?;
            writeln!(buffer, "fn snapshot_{ident}_{kind}() {{")?;
            writeln!(
                buffer,
                "    let input = include_str!(concat!(env!(\"CARGO_MANIFEST_DIR\"), \"/test-data/{stem}.toml\"));"
            )?;
            writeln!(buffer, "    let snapshot = {helper}(input);")?;
            writeln!(
                buffer,
                "    insta::with_settings!({{snapshot_path => concat!(env!(\"CARGO_MANIFEST_DIR\"), \"/test-data\"), prepend_module_to_snapshot => false}}, {{"
            )?;
            writeln!(buffer, "        assert_snapshot!(\"{stem}.{kind}\", snapshot);")?;
            writeln!(buffer, "    }});")?;
            writeln!(buffer, "}}")?;
            writeln!(buffer)?;
        }
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("generated_tests.rs"), buffer)?;
    Ok(())
}
