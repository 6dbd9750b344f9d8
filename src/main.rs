use anyhow::{bail, Context};
use count::{session::Session, Load};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 解析命令行参数：`<containers> <per_container>` 或 `<a>x<b>`
fn parse_args(args: &[String]) -> anyhow::Result<Load> {
    let text = match args {
        [load] => load.clone(),
        [containers, per_container] => format!("{} {}", containers, per_container),
        _ => bail!("usage: container-count [<containers> <per_container> | <containers>x<per_container>]"),
    };
    text.parse::<Load>()
        .with_context(|| format!("invalid arguments {:?}", args))
}

fn total(load: Load) -> anyhow::Result<u64> {
    load.checked_total()
        .with_context(|| format!("{} items overflow u64", load))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        info!("no arguments, reading commands from stdin");
        let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
        session.start()?;
        return Ok(());
    }

    let load = parse_args(&args)?;
    debug!(%load, "counting");
    println!("{}", total(load)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&args(&["3", "3"])).unwrap(), Load::new(3, 3));
        assert_eq!(parse_args(&args(&["10x0"])).unwrap(), Load::new(10, 0));
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["1", "2", "3"])).is_err());
        assert!(parse_args(&args(&["3", "-3"])).is_err());
    }

    #[test]
    fn test_total() {
        assert_eq!(total(Load::new(3, 3)).unwrap(), 9);
        assert_eq!(total(Load::new(10, 0)).unwrap(), 0);
        let err = total(Load::new(u64::MAX, 2)).unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }
}
