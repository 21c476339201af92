use std::fs;
use std::path::{Path, PathBuf};

use iforcedump_core::{OutputFormat, decode_dump_file, render_dump_file};

const INPUT_FILE: &str = "input.txt";
const RECORDS_FILE: &str = "expected_records.json";
const TEXT_FILE: &str = "expected_text.txt";
const SDL_FILE: &str = "expected_sdl.txt";

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    let entries = fs::read_dir(&root)
        .map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {err}"))?;
        let dir = entry.path();
        if dir.join(INPUT_FILE).is_file() {
            cases.push(dir);
        }
    }
    cases.sort();

    for dir in &cases {
        regenerate_case(dir)?;
        println!("regenerated {}", dir.display());
    }
    Ok(())
}

fn regenerate_case(dir: &Path) -> Result<(), String> {
    let input = dir.join(INPUT_FILE);

    let records = decode_dump_file(&input)
        .map_err(|err| format!("failed to decode {}: {}", input.display(), err))?;
    let mut json = serde_json::to_string_pretty(&records)
        .map_err(|err| format!("failed to serialize records: {err}"))?;
    json.push('\n');
    write_file(&dir.join(RECORDS_FILE), json.as_bytes())?;

    write_file(&dir.join(TEXT_FILE), &render(&input, OutputFormat::Text)?)?;
    write_file(&dir.join(SDL_FILE), &render(&input, OutputFormat::Sdl)?)?;
    Ok(())
}

fn render(input: &Path, format: OutputFormat) -> Result<Vec<u8>, String> {
    let mut out = Vec::new();
    render_dump_file(input, format.renderer().as_ref(), &mut out)
        .map_err(|err| format!("failed to render {}: {}", input.display(), err))?;
    Ok(out)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
