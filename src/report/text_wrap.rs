use crate::infrastructure::font_metrics::text_width_mm;

/// 按列宽折行
///
/// - 显式换行符开始新行，空段落保留为空行
/// - 单词按宽度贪心装入
/// - 比整列还宽的单词按字符拆开
pub fn split_text_to_size(text: &str, max_width_mm: f64, font_size_pt: f64) -> Vec<String> {
    let space_width = text_width_mm(" ", font_size_pt);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut line = String::new();
        let mut line_width = 0.0;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = text_width_mm(word, font_size_pt);

            if word_width > max_width_mm {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut chunks = break_word(word, max_width_mm, font_size_pt);
                // 最后一段留在当前行，后面的单词可以接上
                line = chunks.pop().unwrap_or_default();
                line_width = text_width_mm(&line, font_size_pt);
                lines.extend(chunks);
                continue;
            }

            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space_width + word_width <= max_width_mm {
                line.push(' ');
                line.push_str(word);
                line_width += space_width + word_width;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
                line_width = word_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// 按字符拆分超长单词，每段至少一个字符
fn break_word(word: &str, max_width_mm: f64, font_size_pt: f64) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        current.push(ch);
        if current.chars().count() > 1 && text_width_mm(&current, font_size_pt) > max_width_mm {
            current.pop();
            chunks.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(split_text_to_size("Hello world", 180.0, 11.0), vec!["Hello world"]);
    }

    #[test]
    fn test_empty_text_is_single_empty_line() {
        assert_eq!(split_text_to_size("", 180.0, 11.0), vec![String::new()]);
    }

    #[test]
    fn test_newlines_are_kept() {
        let lines = split_text_to_size("Hello\n\nmy name is Asha\r\nThank you", 180.0, 11.0);
        assert_eq!(lines, vec!["Hello", "", "my name is Asha", "Thank you"]);
    }

    #[test]
    fn test_long_paragraph_wraps_within_width() {
        let text = "Hello everyone my name is Asha and I study in class eight at the city school. "
            .repeat(6);
        let lines = split_text_to_size(&text, 180.0, 11.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 11.0) <= 180.0, "too wide: {line}");
        }
        // 折行不丢词
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().count(),
            text.split_whitespace().count()
        );
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let word = "W".repeat(200);
        let lines = split_text_to_size(&word, 50.0, 11.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, 11.0) <= 50.0);
        }
    }

    #[test]
    fn test_word_after_broken_word_joins_tail() {
        let text = format!("{} ok", "W".repeat(60));
        let lines = split_text_to_size(&text, 50.0, 11.0);
        assert!(lines.last().unwrap().ends_with(" ok"));
    }
}
