//! Integration tests for document synthesis and the output store.

use std::collections::HashMap;

use minuta::{
    parse_bytes, Document, DocxWriter, FieldValues, Minuta, Paragraph, TemplateStore, TextRun,
    TextStyle,
};

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn welcome_template() -> Vec<u8> {
    let mut doc = Document::new();
    let mut para = Paragraph::new();
    para.add_text("Dear ");
    para.add_run(TextRun::styled(
        "[Name]",
        TextStyle {
            bold: Some(true),
            ..Default::default()
        },
    ));
    para.add_text(", welcome");
    doc.add_paragraph(para);
    DocxWriter::new().write(&doc).unwrap()
}

#[test]
fn test_fill_substitutes_and_preserves_formatting() {
    let template = Minuta::new().open_bytes(&welcome_template()).unwrap();
    let filled = template.fill(&values(&[("Name", "Ana")]));

    assert_eq!(filled.plain_text(), "Dear Ana, welcome");

    let runs = &filled.paragraphs[0].runs;
    assert_eq!(runs[0].style.bold, None);
    assert_eq!(runs[1].text, "Ana");
    assert_eq!(runs[1].style.bold, Some(true));
    assert_eq!(runs[2].style.bold, None);
}

#[test]
fn test_fill_omits_missing_fields() {
    let template = Minuta::new().open_bytes(&welcome_template()).unwrap();
    let filled = template.fill(&HashMap::new());

    assert_eq!(filled.plain_text(), "Dear , welcome");
}

#[test]
fn test_fill_keeps_missing_fields_when_asked() {
    let template = Minuta::new()
        .keep_missing_fields()
        .open_bytes(&welcome_template())
        .unwrap();
    let filled = template.fill(&HashMap::new());

    assert_eq!(filled.plain_text(), "Dear [Name], welcome");
    // The kept token still carries the placeholder run's formatting
    assert_eq!(filled.paragraphs[0].runs[1].style.bold, Some(true));
}

#[test]
fn test_fill_result_survives_serialization() {
    let template = Minuta::new().open_bytes(&welcome_template()).unwrap();
    let filled = template.fill(&values(&[("Name", "Ana")]));

    let bytes = DocxWriter::new().write(&filled).unwrap();
    let reparsed = parse_bytes(&bytes).unwrap();

    assert_eq!(reparsed.plain_text(), "Dear Ana, welcome");
    assert_eq!(reparsed.paragraphs[0].runs[1].style.bold, Some(true));
}

#[test]
fn test_pass_through_paragraphs_are_untouched() {
    let mut doc = Document::new();
    let mut para = Paragraph::new();
    para.add_run(TextRun::styled(
        "Static ",
        TextStyle {
            italic: Some(true),
            font_name: Some("Garamond".to_string()),
            font_size: Some(14.0),
            ..Default::default()
        },
    ));
    para.add_text("text");
    doc.add_paragraph(para);
    let bytes = DocxWriter::new().write(&doc).unwrap();

    let template = Minuta::new().open_bytes(&bytes).unwrap();
    let filled = template.fill(&values(&[("Unused", "value")]));

    assert_eq!(filled.paragraphs[0].runs, template.document().paragraphs[0].runs);
}

#[test]
fn test_fill_to_file_writes_into_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("generated");

    let template = Minuta::new()
        .with_output_dir(&out_dir)
        .open_bytes(&welcome_template())
        .unwrap();
    let path = template.fill_to_file(&values(&[("Name", "Ana")])).unwrap();

    assert!(path.starts_with(&out_dir));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("minuta_modificada_"));
    assert!(name.ends_with(".docx"));

    let stamp = name
        .trim_start_matches("minuta_modificada_")
        .trim_end_matches(".docx");
    assert_eq!(stamp.len(), 15);
    assert_eq!(stamp.as_bytes()[8], b'_');
    assert!(stamp
        .chars()
        .enumerate()
        .all(|(i, c)| if i == 8 { c == '_' } else { c.is_ascii_digit() }));

    let generated = parse_bytes(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(generated.plain_text(), "Dear Ana, welcome");
}

#[test]
fn test_store_lists_only_eligible_templates() {
    let dir = tempfile::tempdir().unwrap();
    let templates_dir = dir.path().join("templates");
    std::fs::create_dir(&templates_dir).unwrap();

    std::fs::write(templates_dir.join("b_modelo.docx"), b"x").unwrap();
    std::fs::write(templates_dir.join("a_modelo.docx"), b"x").unwrap();
    std::fs::write(templates_dir.join("~$a_modelo.docx"), b"x").unwrap();
    std::fs::write(templates_dir.join("notas.txt"), b"x").unwrap();

    let store = TemplateStore::new(dir.path());
    let listed = store.list_templates().unwrap();
    assert_eq!(
        listed,
        vec![
            templates_dir.join("a_modelo.docx"),
            templates_dir.join("b_modelo.docx"),
        ]
    );
}

#[test]
fn test_end_to_end_from_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("templates").join("carta.docx");
    std::fs::create_dir_all(template_path.parent().unwrap()).unwrap();

    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("Prezado [Nome], seu prazo é [Prazo]."));
    DocxWriter::new().save(&doc, &template_path).unwrap();

    let template = Minuta::new()
        .with_output_dir(dir.path().join("generated"))
        .open(&template_path)
        .unwrap();
    assert_eq!(template.fields(), vec!["Nome", "Prazo"]);

    let path = template
        .fill_to_file(&values(&[("Nome", "Ana"), ("Prazo", "30 dias")]))
        .unwrap();
    let generated = parse_bytes(&std::fs::read(path).unwrap()).unwrap();
    assert_eq!(generated.plain_text(), "Prezado Ana, seu prazo é 30 dias.");
}
