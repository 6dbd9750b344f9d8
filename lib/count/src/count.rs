/*
 * 计数模块 - 容器数量 x 每个容器的物品数量
 *
 * - count: 总数 = containers * per_container
 * - checked_count: 溢出时返回 None，供外部输入使用
 * - Load: 一次计数的输入，可从 "3x3"、"3*3"、"3 3" 形式的文本解析
 */

use regex::Regex;
use std::{fmt, num::ParseIntError, str::FromStr, sync::LazyLock};

static LOAD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<containers>\S+?)\s*(?:[x*]|\s)\s*(?P<per>\S+)\s*$").unwrap());

/// Total number of items held by `containers` holders of `per_container` items each.
///
/// Overflowing `u64` follows ordinary integer arithmetic; use [`checked_count`]
/// when the inputs come from outside the program.
///
/// ```
/// assert_eq!(count::count(3, 3), 9);
/// assert_eq!(count::count(10, 0), 0);
/// ```
pub fn count(containers: u64, per_container: u64) -> u64 {
    containers * per_container
}

/// Like [`count`], but `None` when the total does not fit in a `u64`.
pub fn checked_count(containers: u64, per_container: u64) -> Option<u64> {
    containers.checked_mul(per_container)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Load {
    pub containers: u64,
    pub per_container: u64,
}

impl Load {
    pub fn new(containers: u64, per_container: u64) -> Self {
        Load {
            containers,
            per_container,
        }
    }

    pub fn total(&self) -> u64 {
        count(self.containers, self.per_container)
    }

    pub fn checked_total(&self) -> Option<u64> {
        checked_count(self.containers, self.per_container)
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.containers, self.per_container)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLoadError {
    /// Input is not two quantities separated by `x`, `*` or whitespace.
    Malformed(String),
    InvalidNumber(String, ParseIntError),
}

impl fmt::Display for ParseLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseLoadError::Malformed(input) => write!(f, "expected <containers>x<per_container>, got {:?}", input),
            ParseLoadError::InvalidNumber(token, err) => write!(f, "{:?}: {}", token, err),
        }
    }
}

impl std::error::Error for ParseLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseLoadError::Malformed(_) => None,
            ParseLoadError::InvalidNumber(_, err) => Some(err),
        }
    }
}

fn parse_quantity(token: &str) -> Result<u64, ParseLoadError> {
    token
        .parse::<u64>()
        .map_err(|err| ParseLoadError::InvalidNumber(token.to_owned(), err))
}

impl FromStr for Load {
    type Err = ParseLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = LOAD_PATTERN
            .captures(s)
            .ok_or_else(|| ParseLoadError::Malformed(s.to_owned()))?;
        let containers = parse_quantity(&captures["containers"])?;
        let per_container = parse_quantity(&captures["per"])?;
        Ok(Load::new(containers, per_container))
    }
}
