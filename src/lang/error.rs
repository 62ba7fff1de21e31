pub struct Error {
    code: u16,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            message: String::new(),
        }
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.to_string();
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    DivisionByZero = 11,
    UnknownOperation = 18,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            11 => "DIVISION BY ZERO",
            18 => "UNKNOWN OPERATION",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        if code_str.is_empty() {
            if self.message.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {}; {}", self.code, self.message)
            }
        } else if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}
