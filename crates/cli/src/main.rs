mod io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kappa::api::{
    demo_compression, demo_tension, draw_polyline, linspace, sweep, CrossSection, Points,
    PolylineCfg, SectionCfg, SectionEvaluator, SectionState,
};
use provenance::Payload;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kappa-cli")]
#[command(about = "Moment-curvature numerics: sweeps, section balance, test polylines")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area and first moment of one curve cut at evenly spaced strains
    Sweep(SweepArgs),
    /// Force residual and moment of a section over a reference-strain grid
    Section(SectionArgs),
    /// Write a random sorted strain/stress polyline as CSV
    Gen(GenArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Debug)]
struct SweepArgs {
    /// eps/sig CSV; the built-in compression curve when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = 200)]
    points: usize,
    #[arg(long, default_value_t = 0.0)]
    eps_min: f64,
    /// Defaults to the last strain of the curve
    #[arg(long)]
    eps_max: Option<f64>,
    /// Rows printed to stdout
    #[arg(long, default_value_t = 30)]
    show: usize,
    /// JSON file for all slices (plus a provenance sidecar)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct SectionArgs {
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    #[arg(long, default_value_t = 1e-5)]
    kappa: f64,
    /// JSON with optional `section`, `compression`, `tension`, `cfg`
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 200)]
    steps: usize,
    #[arg(long, default_value_t = 0.0)]
    eps_min: f64,
    #[arg(long, default_value_t = 0.003)]
    eps_max: f64,
    #[arg(long, default_value_t = 30)]
    show: usize,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct GenArgs {
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 20_000)]
    points: usize,
    #[arg(long, default_value_t = 6)]
    keypoints: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Section setup read from `--config`; every field falls back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionFile {
    section: Option<CrossSection>,
    compression: Option<Points>,
    tension: Option<Points>,
    #[serde(default)]
    cfg: SectionCfg,
}

/// One grid row of `section`; failed evaluations keep their message.
#[derive(Debug, Serialize)]
struct SectionRow {
    eps_ca: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<SectionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sweep(args) => run_sweep(&args),
        Action::Section(args) => run_section(&args),
        Action::Gen(args) => run_gen(&args),
        Action::Report => report(),
    }
}

fn load_curve(input: Option<&Path>) -> Result<Points> {
    match input {
        Some(path) => io::read_points(path),
        None => Ok(demo_compression()),
    }
}

fn run_sweep(args: &SweepArgs) -> Result<()> {
    let curve = load_curve(args.input.as_deref())?;
    if !curve.is_sorted() {
        tracing::warn!(len = curve.len(), "input strains are not sorted; cuts may be rejected");
    }
    let eps_max = args
        .eps_max
        .or_else(|| curve.last().map(|(e, _)| e))
        .context("empty input curve")?;
    let cuts = linspace(args.eps_min, eps_max, args.points);

    let t0 = Instant::now();
    let slices = sweep(&cuts, &curve);
    tracing::info!(
        cuts = cuts.len(),
        vertices = curve.len(),
        elapsed_ms = t0.elapsed().as_secs_f64() * 1e3,
        "sweep"
    );

    println!("{:>12} {:>14} {:>14}", "eps", "area", "moment");
    for s in slices.iter().take(args.show) {
        println!("{:>12.6} {:>14.6e} {:>14.6e}", s.cut, s.area, s.moment);
    }

    if let Some(out) = &args.out {
        io::ensure_parent(out)?;
        std::fs::write(out, serde_json::to_vec_pretty(&slices)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = json!({
            "points": args.points,
            "eps_min": args.eps_min,
            "eps_max": eps_max,
        });
        provenance::write_sidecar(out, Payload::new(params).with_input(args.input.as_deref()))?;
    }
    Ok(())
}

fn load_section(args: &SectionArgs) -> Result<(CrossSection, Points, Points, SectionCfg)> {
    let file = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SectionFile>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SectionFile::default(),
    };
    Ok((
        file.section.unwrap_or_else(|| CrossSection::new(args.height)),
        file.compression.unwrap_or_else(demo_compression),
        file.tension.unwrap_or_else(demo_tension),
        file.cfg,
    ))
}

fn section_rows(ev: &SectionEvaluator<'_>, grid: &[f64], kappa: f64) -> Vec<SectionRow> {
    grid.iter()
        .zip(ev.eval_many(grid, kappa))
        .map(|(&eps_ca, res)| match res {
            Ok(state) => SectionRow {
                eps_ca,
                state: Some(state),
                error: None,
            },
            Err(err) => SectionRow {
                eps_ca,
                state: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

/// First pair of neighbouring grid points whose residuals differ in sign.
fn residual_bracket(rows: &[SectionRow]) -> Option<(f64, f64)> {
    rows.windows(2).find_map(|w| match (&w[0].state, &w[1].state) {
        (Some(a), Some(b)) if a.residual().signum() != b.residual().signum() => {
            Some((w[0].eps_ca, w[1].eps_ca))
        }
        _ => None,
    })
}

fn run_section(args: &SectionArgs) -> Result<()> {
    let (cs, cc, ft, cfg) = load_section(args)?;
    let ev = SectionEvaluator::with_cfg(&cs, cc, ft, cfg);
    let grid = linspace(args.eps_min, args.eps_max, args.steps);

    let t0 = Instant::now();
    let rows = section_rows(&ev, &grid, args.kappa);
    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    tracing::info!(
        steps = rows.len(),
        failed,
        kappa = args.kappa,
        height = cs.height,
        elapsed_ms = t0.elapsed().as_secs_f64() * 1e3,
        "section"
    );
    match residual_bracket(&rows) {
        Some((lo, hi)) => tracing::info!(lo, hi, "force balance bracketed"),
        None => tracing::warn!("residual does not change sign on the grid"),
    }

    println!(
        "{:>12} {:>14} {:>14} {:>14}",
        "eps_ca", "f_cc", "residual", "m_ca"
    );
    for row in rows.iter().take(args.show) {
        match (&row.state, &row.error) {
            (Some(s), _) => println!(
                "{:>12.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
                s.eps_ca,
                s.f_cc,
                s.residual(),
                s.m_ca
            ),
            (None, Some(err)) => println!("{:>12.6e} {err}", row.eps_ca),
            (None, None) => {}
        }
    }

    if let Some(out) = &args.out {
        io::ensure_parent(out)?;
        std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = json!({
            "section": cs,
            "cfg": cfg,
            "kappa": args.kappa,
            "steps": args.steps,
            "eps_min": args.eps_min,
            "eps_max": args.eps_max,
        });
        provenance::write_sidecar(out, Payload::new(params).with_input(args.config.as_deref()))?;
    }
    Ok(())
}

fn run_gen(args: &GenArgs) -> Result<()> {
    let cfg = PolylineCfg {
        points: args.points,
        keypoints: args.keypoints,
        ..PolylineCfg::default()
    };
    let curve = draw_polyline(&cfg, args.seed)?;
    io::write_points(&args.out, &curve)?;
    tracing::info!(
        points = curve.len(),
        seed = args.seed,
        out = %args.out.display(),
        "gen"
    );
    let params = json!({
        "points": cfg.points,
        "keypoints": cfg.keypoints,
        "eps_range": [cfg.eps_min, cfg.eps_max],
        "sig_range": [cfg.sig_min, cfg.sig_max],
        "seed": args.seed,
    });
    provenance::write_sidecar(&args.out, Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn section_args(extra: &[&str]) -> SectionArgs {
        let mut argv = vec!["kappa-cli", "section"];
        argv.extend_from_slice(extra);
        match Cmd::try_parse_from(argv).unwrap().action {
            Action::Section(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn defaults_follow_the_demo_driver() {
        match Cmd::try_parse_from(["kappa-cli", "sweep"]).unwrap().action {
            Action::Sweep(args) => {
                assert_eq!(args.points, 200);
                assert_eq!(args.show, 30);
                assert!(args.input.is_none());
            }
            _ => panic!("expected sweep"),
        }
        let args = section_args(&[]);
        assert_eq!(args.height, 300.0);
        assert_eq!(args.steps, 200);
    }

    #[test]
    fn sweep_writes_slices_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sweep.json");
        let args = SweepArgs {
            input: None,
            points: 11,
            eps_min: 0.0,
            eps_max: None,
            show: 0,
            out: Some(out.clone()),
        };
        run_sweep(&args).unwrap();
        let slices: Vec<kappa::api::Slice> =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(slices.len(), 11);
        assert_eq!(slices[10].cut, 0.01);
        assert!(slices[10].area > 0.0);
        assert!(dir.path().join("sweep.provenance.json").exists());
    }

    #[test]
    fn gen_then_sweep_from_csv() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("curve.csv");
        run_gen(&GenArgs {
            out: csv.clone(),
            points: 50,
            keypoints: 4,
            seed: 9,
        })
        .unwrap();
        let curve = io::read_points(&csv).unwrap();
        assert_eq!(curve.len(), 50);
        assert!(curve.is_sorted());

        let out = dir.path().join("s.json");
        run_sweep(&SweepArgs {
            input: Some(csv),
            points: 5,
            eps_min: 0.0,
            eps_max: None,
            show: 5,
            out: Some(out.clone()),
        })
        .unwrap();
        assert!(out.exists());
    }

    #[test]
    fn section_config_overrides_defaults() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("section.json");
        std::fs::write(
            &cfg,
            r#"{"tension": {"epsilon": [0.0, 0.01], "sigma": [0.0, 10.0]},
                "cfg": {"eps_ca_max": 0.002}}"#,
        )
        .unwrap();
        let cfg_arg = cfg.to_string_lossy().into_owned();
        let args = section_args(&["--config", &cfg_arg, "--height", "200"]);
        let (cs, cc, ft, sc) = load_section(&args).unwrap();
        assert_eq!(cs.height, 200.0);
        assert_eq!(cc, demo_compression());
        assert_eq!(ft.len(), 2);
        assert_eq!(sc.eps_ca_max, Some(0.002));
    }

    #[test]
    fn malformed_section_config_is_rejected() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("bad.json");
        std::fs::write(&cfg, r#"{"tension": {"epsilon": [0.0], "sigma": []}}"#).unwrap();
        let cfg_arg = cfg.to_string_lossy().into_owned();
        assert!(load_section(&section_args(&["--config", &cfg_arg])).is_err());
    }

    #[test]
    fn default_section_is_bracketed() {
        let args = section_args(&["--eps-min=-0.0014", "--eps-max=0.0014", "--steps", "29"]);
        let (cs, cc, ft, cfg) = load_section(&args).unwrap();
        let ev = SectionEvaluator::with_cfg(&cs, cc, ft, cfg);
        let rows = section_rows(&ev, &linspace(args.eps_min, args.eps_max, args.steps), args.kappa);
        assert!(rows.iter().all(|r| r.state.is_some()));
        let (lo, hi) = residual_bracket(&rows).unwrap();
        assert!(lo < hi);
    }
}
