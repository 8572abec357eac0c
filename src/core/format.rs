use std::fmt;

const PRECISION: usize = 6;

/// 與 C++ 預設串流相同的浮點數格式（%g，六位有效數字）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // 以四捨五入後的指數決定使用科學記號或定點
        let scientific = format!("{:.*e}", PRECISION - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            f.write_str(trim_fraction(&format!("{:.*}", decimals, value)))
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// `std::to_string(double)` 的格式（%f）
pub fn fixed6(value: f64) -> String {
    format!("{:.6}", value)
}

/// 布林值以 1 / 0 輸出
pub fn flag(value: bool) -> u8 {
    u8::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        Real(value).to_string()
    }

    #[test]
    fn test_real_fixed_notation() {
        assert_eq!(g(3.8), "3.8");
        assert_eq!(g(5.0), "5");
        assert_eq!(g(15.5), "15.5");
        assert_eq!(g(1666.6666666), "1666.67");
        assert_eq!(g(7.0 / 3.0), "2.33333");
        assert_eq!(g(-2.5), "-2.5");
        assert_eq!(g(123456.0), "123456");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(0.0), "0");
    }

    #[test]
    fn test_real_scientific_notation() {
        assert_eq!(g(1_000_000.0), "1e+06");
        assert_eq!(g(1_234_567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(-0.000012345), "-1.2345e-05");
        assert_eq!(g(999_999.7), "1e+06");
    }

    #[test]
    fn test_fixed6_and_flag() {
        assert_eq!(fixed6(1000.0), "1000.000000");
        assert_eq!(fixed6(50.0), "50.000000");
        assert_eq!(flag(true), 1);
        assert_eq!(flag(false), 0);
    }
}
