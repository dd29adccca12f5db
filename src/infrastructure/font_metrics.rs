//! Helvetica 字宽表
//!
//! 数值来自 Adobe 标准 14 字体的 AFM，单位为 1/1000 em。
//! 表中只覆盖可打印 ASCII（32..=126），其余字符按 '?' 的宽度计算。

const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const FALLBACK_WIDTH: u16 = 556;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// 单个字符的宽度（1/1000 em）
pub fn char_width(ch: char) -> u16 {
    let code = ch as u32;
    if (32..=126).contains(&code) {
        HELVETICA_ASCII[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// 文本在给定字号下的宽度（毫米）
pub fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    f64::from(units) / 1000.0 * font_size_pt * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('W'), 944);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('~'), 584);
        assert_eq!(char_width('é'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width_scales_with_font_size() {
        let small = text_width_mm("Hello", 10.0);
        let large = text_width_mm("Hello", 20.0);
        assert!((large - 2.0 * small).abs() < 1e-9);
        // "Hello" = 722+556+222+222+556 = 2278 units
        assert!((small - 2.278 * 10.0 * 25.4 / 72.0).abs() < 1e-9);
    }
}
