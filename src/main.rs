/*
 * vMailhost mail proxy configuration renderer
 * Copyright (C) 2026 Team vMailhost
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
*/
use anyhow::Context;

use vmailhost::{
    log_channel, plan, render_fragments, Args, Commands, ConcatFile, Config, Ensure, HostFacts,
    Mailhost, OrderKey, Outcome, TextRenderer, ValidationError,
};

fn load_config(path: Option<&String>) -> anyhow::Result<Config> {
    path.map_or_else(
        || Ok(Config::default()),
        |path| {
            std::fs::read_to_string(path)
                .context(format!("Cannot read file '{path}'"))
                .and_then(|f| Config::from_toml(&f).context("File contains format error"))
                .context("Cannot parse the configuration")
        },
    )
}

/// Validate and render one host; `None` when validation failed (logged).
fn render_host(
    config: &Config,
    facts: &HostFacts,
    name: &str,
    field: &vmailhost::FieldHost,
) -> Option<(Mailhost, Vec<(OrderKey, String)>)> {
    match Mailhost::validate(name, field.clone(), &config.ssl, facts) {
        Ok(host) => {
            let fragments = plan(&host);
            let rendered = render_fragments(&TextRenderer, &fragments);
            Some((host, rendered))
        }
        Err(e) => {
            log::error!(target: log_channel::VALIDATE, "{e}");
            None
        }
    }
}

fn print_diff(path: &std::path::Path, current: &str, next: &str) {
    println!("--- {}", path.display());
    for line in diff::lines(current, next) {
        match line {
            diff::Result::Left(l) => println!("-{l}"),
            diff::Result::Both(l, _) => println!(" {l}"),
            diff::Result::Right(r) => println!("+{r}"),
        }
    }
}

fn apply(config: &Config, facts: &HostFacts, check: bool) -> anyhow::Result<()> {
    if !config.proxy.conf_dir.exists() {
        return Err(ValidationError::BaseConfigMissing {
            path: config.proxy.conf_dir.clone(),
        }
        .into());
    }

    let mut changed = 0_usize;
    let mut failed = 0_usize;

    for (name, field) in &config.hosts {
        let Some((host, rendered)) = render_host(config, facts, name, field) else {
            failed += 1;
            continue;
        };
        let file = ConcatFile::new(name, &config.proxy);

        if check {
            let next = match host.ensure {
                Ensure::Present => ConcatFile::assemble(rendered),
                Ensure::Absent => String::new(),
            };
            let current = std::fs::read_to_string(file.path()).unwrap_or_default();
            if current == next {
                continue;
            }
            changed += 1;
            print_diff(file.path(), &current, &next);
        } else {
            match file.apply(host.ensure, rendered) {
                Ok(Outcome::Unchanged) => {}
                Ok(Outcome::Written) => {
                    changed += 1;
                    println!("{name}: updated '{}'", file.path().display());
                }
                Ok(Outcome::Removed) => {
                    changed += 1;
                    println!("{name}: removed '{}'", file.path().display());
                }
                Err(e) => {
                    log::error!(target: log_channel::OUTPUT, "host '{name}': {e:#}");
                    failed += 1;
                }
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} host(s) failed to converge");
    }
    if changed > 0 && !check {
        reload(config)?;
    }
    Ok(())
}

fn reload(config: &Config) -> anyhow::Result<()> {
    match &config.proxy.reload {
        None => Ok(()),
        Some(reload) => {
            let status = std::process::Command::new(&reload.command)
                .args(&reload.args)
                .status()
                .with_context(|| format!("cannot spawn reload command '{}'", reload.command))?;
            anyhow::ensure!(
                status.success(),
                "reload command '{}' exited with {status}",
                reload.command
            );
            log::info!(target: log_channel::OUTPUT, "proxy reloaded");
            Ok(())
        }
    }
}

fn show(config: &Config, facts: &HostFacts, name: &str) -> anyhow::Result<()> {
    let field = config
        .hosts
        .get(name)
        .with_context(|| format!("host '{name}' is not declared"))?;
    let (_, rendered) = render_host(config, facts, name, field)
        .with_context(|| format!("host '{name}' failed to validate"))?;
    print!("{}", ConcatFile::assemble(rendered));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = <Args as clap::Parser>::parse();

    let config = load_config(args.config.as_ref())?;
    log4rs::init_config(vmailhost::get_logger_config(&config)?)?;

    let facts = HostFacts::gather();

    match args.command {
        Commands::Apply { check } => apply(&config, &facts, check),
        Commands::Show { host } => show(&config, &facts, &host),
    }
}
