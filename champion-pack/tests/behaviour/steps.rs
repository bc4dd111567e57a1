//! Step definitions for the champion packing scenarios.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, ensure};
use champion_pack::{PackConfig, generate};
use rstest_bdd_macros::{given, then, when};
use test_helpers::tree::ChampionTree;

use super::fixtures::PackState;

const MODULE_PATH: &str = "web/src/champions.ts";
const MODULE_PREFIX: &str = "export const champions = ";

#[given("a champion directory with a plain and an extending champion")]
fn champion_directory(pack_state: &PackState) -> Result<()> {
    let tree = ChampionTree::new()?;
    tree.write("champs/a.s", "MOV 1\n")?;
    tree.write("champs/b.s", ".extend\nMOV 2\n")?;
    tree.mkdir("web/src")?;
    pack_state.tree.set(tree);
    Ok(())
}

#[when("the champions are packed without a filter")]
fn pack_unfiltered(pack_state: &PackState) -> Result<()> {
    pack(pack_state, None)
}

#[when("the champions are packed excluding the line {line}")]
fn pack_filtered(pack_state: &PackState, line: String) -> Result<()> {
    pack(pack_state, Some(format!("{line}\n")))
}

#[when("the champions are packed again")]
fn pack_again(pack_state: &PackState) -> Result<()> {
    let previous = pack_state
        .module
        .with_ref(String::clone)
        .ok_or_else(|| anyhow!("the champions must be packed once first"))?;
    pack_state.previous_module.set(previous);
    pack(pack_state, None)
}

#[then("the module exports champions {names}")]
fn module_exports(pack_state: &PackState, names: String) -> Result<()> {
    let mapping = exported_mapping(pack_state)?;
    let actual: Vec<&str> = mapping.keys().map(String::as_str).collect();
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    ensure!(actual == expected, "unexpected champions {actual:?}");
    Ok(())
}

#[then("champion b keeps its source verbatim")]
fn champion_b_verbatim(pack_state: &PackState) -> Result<()> {
    let mapping = exported_mapping(pack_state)?;
    ensure!(
        mapping.get("b").map(String::as_str) == Some(".extend\nMOV 2\n"),
        "champion b was altered: {:?}",
        mapping.get("b")
    );
    Ok(())
}

#[then("champion b is reported as excluded")]
fn champion_b_excluded(pack_state: &PackState) -> Result<()> {
    let excluded = pack_state
        .summary
        .with_ref(|summary| summary.excluded.clone())
        .ok_or_else(|| anyhow!("no packing summary recorded"))?;
    ensure!(excluded == ["b"], "unexpected exclusions {excluded:?}");
    Ok(())
}

#[then("both runs produced identical modules")]
fn identical_modules(pack_state: &PackState) -> Result<()> {
    let previous = pack_state
        .previous_module
        .with_ref(String::clone)
        .ok_or_else(|| anyhow!("no earlier module recorded"))?;
    let current = current_module(pack_state)?;
    ensure!(previous == current, "module changed between runs");
    Ok(())
}

fn pack(pack_state: &PackState, exclude_pattern: Option<String>) -> Result<()> {
    let (root_dir, output_path) = pack_state
        .tree
        .with_ref(|tree| (tree.path("champs"), tree.path(MODULE_PATH)))
        .ok_or_else(|| anyhow!("the champion directory must exist before packing"))?;
    let config = PackConfig {
        root_dir,
        output_path,
        exclude_pattern,
        ..PackConfig::default()
    };
    let summary = generate(&config)?;
    let module = pack_state
        .tree
        .with_ref(|tree| tree.read(MODULE_PATH))
        .ok_or_else(|| anyhow!("champion directory disappeared"))??;
    pack_state.summary.set(summary);
    pack_state.module.set(module);
    Ok(())
}

fn current_module(pack_state: &PackState) -> Result<String> {
    pack_state
        .module
        .with_ref(String::clone)
        .ok_or_else(|| anyhow!("the champions have not been packed"))
}

fn exported_mapping(pack_state: &PackState) -> Result<BTreeMap<String, String>> {
    let module = current_module(pack_state)?;
    let json = module
        .strip_prefix(MODULE_PREFIX)
        .ok_or_else(|| anyhow!("unexpected module header: {module:?}"))?;
    serde_json::from_str(json).context("module body should be a JSON object")
}
