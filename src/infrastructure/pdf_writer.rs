//! PDF 编码 - 基础设施层
//!
//! 把已经排好版的页面写成 PDF 字节，使用内置 Helvetica 字体

use crate::error::ReportError;
use crate::report::{PageLayout, ReportLayout};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// A4 尺寸（pt）
const PAGE_WIDTH_PT: f32 = 595.28;
const PAGE_HEIGHT_PT: f32 = 841.89;
const MM_TO_PT: f64 = 72.0 / 25.4;

const FONT_NAME: &str = "F1";

/// PDF 写入器
///
/// 排版坐标以毫米、左上角为原点；写入时换算为 PDF 的 pt、左下角原点
#[derive(Debug, Default)]
pub struct PdfWriter;

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// 将排版结果编码为 PDF 字节
    pub fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_NAME => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
        for page in &layout.pages {
            let page_id = self.add_page(&mut doc, pages_id, page)?;
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(page_count),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                PAGE_WIDTH_PT.into(),
                PAGE_HEIGHT_PT.into(),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    fn add_page(
        &self,
        doc: &mut Document,
        pages_id: ObjectId,
        page: &PageLayout,
    ) -> Result<ObjectId, ReportError> {
        let mut operations = Vec::with_capacity(page.items.len() * 5);
        for item in &page.items {
            let x = (item.x * MM_TO_PT) as f32;
            let y = PAGE_HEIGHT_PT - (item.y * MM_TO_PT) as f32;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![FONT_NAME.into(), (item.font_size as f32).into()],
            ));
            operations.push(Operation::new("Td", vec![x.into(), y.into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&item.text))],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        Ok(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        }))
    }
}

/// 将文本编码为 WinAnsi 字节，无法表示的字符写成 '?'
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
