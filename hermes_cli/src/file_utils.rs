use std::{fs::File, io::BufReader, path::PathBuf};

use hermes_instructions::{
    distance_calc::HaversineDistanceCalc, instruction_list::InstructionList,
    json::types::JsonRoute,
};
use tracing::debug;

pub fn read_folder(folder_path: &PathBuf) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.insert(0, path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// The file itself, or every `.json` file below the folder.
pub fn collect_routes(input: &PathBuf) -> Result<Vec<PathBuf>, std::io::Error> {
    if input.is_file() {
        return Ok(vec![input.clone()]);
    }

    let mut files = read_folder(input)?;
    files.retain(|path| path.extension().map(|ext| ext == "json").unwrap_or(false));
    Ok(files)
}

pub fn load_route(path: &PathBuf) -> anyhow::Result<InstructionList> {
    let f = File::open(path)?;
    let content: JsonRoute = serde_json::from_reader(BufReader::new(f))?;
    let instructions = content.build_instruction_list(&HaversineDistanceCalc)?;

    debug!(
        "Loaded {:?}: {} instructions, {} points",
        path,
        instructions.len(),
        instructions.total_points()
    );

    Ok(instructions)
}
