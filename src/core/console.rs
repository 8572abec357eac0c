use crate::utils::error::{LabError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Cursor, Write};
use std::rc::Rc;
use std::str::FromStr;

/// 共用的輸出端；物件在 Drop 時也透過它列印
#[derive(Clone)]
pub struct Output {
    sink: Rc<RefCell<dyn Write>>,
}

impl Output {
    pub fn new<W: Write + 'static>(writer: W) -> Self {
        let sink: Rc<RefCell<dyn Write>> = Rc::new(RefCell::new(writer));
        Self { sink }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// 讓 `write!` / `writeln!` 可以直接作用在共用的 handle 上
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.sink.borrow_mut().write_fmt(args)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.borrow_mut().flush()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

/// In-memory sink used to capture a transcript.
#[derive(Clone, Default, Debug)]
pub struct TranscriptBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for TranscriptBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 以空白分隔的 token 讀取器，token 可以跨行
pub struct Input {
    reader: Box<dyn BufRead>,
    pending: VecDeque<String>,
}

impl Input {
    pub fn new<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(reader),
            pending: VecDeque::new(),
        }
    }

    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }

    pub fn from_script(script: &str) -> Self {
        Self::new(Cursor::new(script.as_bytes().to_vec()))
    }

    pub fn empty() -> Self {
        Self::from_script("")
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn read<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        match self.next_token()? {
            Some(token) => token
                .parse()
                .map_err(|_| LabError::InvalidInputError {
                    expected: expected.to_string(),
                    found: token,
                }),
            None => Err(LabError::UnexpectedEofError {
                expected: expected.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Console {
    pub input: Input,
    pub out: Output,
}

impl Console {
    pub fn new(input: Input, out: Output) -> Self {
        Self { input, out }
    }

    /// 建立把輸出收集在記憶體中的 console
    pub fn capture(input: Input) -> (Self, TranscriptBuffer) {
        let buffer = TranscriptBuffer::new();
        let console = Self::new(input, Output::new(buffer.clone()));
        (console, buffer)
    }

    /// 不換行的提示字串，寫完立即 flush
    pub fn prompt(&self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
