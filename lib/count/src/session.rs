/* 文本协议会话：逐行读取命令，输出计数结果 */
use crate::count::Load;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub struct Session<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Session { reader, writer }
    }

    /// Run until `quit` or end of input.
    pub fn start(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("input closed");
                break;
            }
            let cmd = line.trim();
            if cmd.is_empty() {
                continue;
            }
            if cmd == "quit" {
                self.quit()?;
                break;
            }
            let mut token = cmd.splitn(2, ' ');
            let name = token.next().unwrap_or_default();
            let args = token.next().unwrap_or_default();
            debug!(command = name, args, "received");
            match name {
                "info" => self.info()?,
                "isready" => self.is_ready()?,
                "count" => self.count(args)?,
                _ => {
                    warn!(command = name, "unknown command");
                    writeln!(self.writer, "not support")?;
                }
            }
            self.writer.flush()?;
        }
        self.writer.flush()
    }

    pub fn info(&mut self) -> io::Result<()> {
        writeln!(self.writer, "id name container-count {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer, "countok")
    }

    pub fn is_ready(&mut self) -> io::Result<()> {
        writeln!(self.writer, "readyok")
    }

    // 计算并输出总数；参数错误或溢出只报告，不中断会话
    pub fn count(&mut self, args: &str) -> io::Result<()> {
        let load: Load = match args.parse() {
            Ok(load) => load,
            Err(err) => {
                warn!(%err, "rejected load");
                return writeln!(self.writer, "error invalid load: {}", err);
            }
        };
        match load.checked_total() {
            Some(total) => writeln!(self.writer, "total {}", total),
            None => {
                warn!(%load, "total overflows u64");
                writeln!(self.writer, "error overflow {}", load)
            }
        }
    }

    pub fn quit(&mut self) -> io::Result<()> {
        writeln!(self.writer, "bye")
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
