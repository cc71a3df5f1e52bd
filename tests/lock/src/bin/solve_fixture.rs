//! Binary that solves every fixture maze and prints deterministic
//! `key=value` lines for cross-process verification.
//!
//! Usage: `solve_fixture`

use lock_tests::{load_fixture, BLOCK_FIXTURES, HASH_FIXTURES};
use maze_harness::render::{encode_png, image_digest, render, RenderOptions};
use maze_search::engine::solve;
use maze_search::policy::{ExploredCheck, SearchConfig};
use maze_search::report::SearchReport;

fn main() {
    let configs = [
        SearchConfig::default(),
        SearchConfig::default().with_explored_check(ExploredCheck::OnInsert),
        SearchConfig::depth_first(),
    ];

    for name in BLOCK_FIXTURES.iter().chain(HASH_FIXTURES) {
        let grid = load_fixture(name);
        println!("fixture={name}");
        println!("grid_fingerprint={}", grid.fingerprint());

        for config in configs {
            let outcome = solve(&grid, config);
            let report = SearchReport::from_outcome(&grid, &config, &outcome);
            let digest = report.digest().expect("report canonicalizes");
            let prefix = format!(
                "{}.{}",
                config.frontier.as_str(),
                config.explored_check.as_str()
            );
            println!(
                "{prefix}.termination={}",
                if outcome.is_solved() { "solved" } else { "exhausted" }
            );
            println!("{prefix}.num_explored={}", outcome.num_explored);
            println!("{prefix}.report_digest={digest}");

            let cells = outcome
                .moves()
                .map(|moves| grid.walk(moves).expect("solution replays"));
            let img = render(
                &grid,
                &outcome.explored,
                cells.as_deref(),
                RenderOptions::default(),
            )
            .expect("fixture renders");
            let png = encode_png(&img).expect("png encodes");
            println!("{prefix}.image_digest={}", image_digest(&png));
        }
    }
}
