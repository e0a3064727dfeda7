use aladdin_auto::model::Protection;
use aladdin_auto::{ConfigDocument, PageNode, top_level_pages, user_top_level_pages};

fn doc_with_pages(product: &str, pages: &str) -> ConfigDocument {
    let xml = format!(
        r#"<config>
  <rootPage>
    <page title="Configuration">
{}
    </page>
  </rootPage>
  <parameters/>
  <tableList/>
</config>"#,
        pages
    );
    ConfigDocument::from_xml(&xml, product, "DR001", product).expect("parse pages")
}

fn titles(pages: &[PageNode<'_>]) -> Vec<String> {
    pages
        .iter()
        .map(|p| p.title().unwrap_or("").to_string())
        .collect()
}

#[test]
fn product_wrapper_is_replaced_by_its_children() {
    let doc = doc_with_pages(
        "Widget-100",
        r#"<page title="Widget-100 Main"><page title="X"/><page title="Y"/></page>
           <page title="B"/>"#,
    );
    assert_eq!(titles(&top_level_pages(&doc)), vec!["X", "Y", "B"]);
}

#[test]
fn no_wrappers_returns_children_unchanged() {
    let doc = doc_with_pages(
        "Widget-100",
        r#"<page title="Interface"><page title="Sub"/></page>
           <page title="Reading"/>
           <page title="Beeper"/>"#,
    );
    assert_eq!(
        titles(&top_level_pages(&doc)),
        vec!["Interface", "Reading", "Beeper"]
    );
}

#[test]
fn scanner_wrappers_are_hoisted_recursively() {
    let doc = doc_with_pages(
        "Gryphon-4500",
        r#"<page title="A"/>
           <page title="2D Imager Scanner">
             <page title="Linear Imager Scanner"><page title="L1"/></page>
             <page title="S1"/>
           </page>
           <page title="Empty Gryphon-4500 wrapper"/>
           <page title="Z"/>"#,
    );
    assert_eq!(titles(&top_level_pages(&doc)), vec!["A", "L1", "S1", "Z"]);
}

#[test]
fn base_variants_keep_scanner_pages() {
    let doc = doc_with_pages(
        "Gryphon-BASE-4500",
        r#"<page title="2D Imager Scanner"><page title="S1"/></page>
           <page title="Gryphon-BASE-4500"><page title="P1"/></page>"#,
    );
    assert_eq!(
        titles(&top_level_pages(&doc)),
        vec!["2D Imager Scanner", "P1"]
    );
}

#[test]
fn user_pages_exclude_protected_sections() {
    let doc = doc_with_pages(
        "Widget-100",
        r#"<page title="Interface"/>
           <page title="Factory" protection="FACTORY"/>
           <page title="Reading" protection="USER"/>"#,
    );
    let all = top_level_pages(&doc);
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].protection(), Some(Protection::Factory));
    assert_eq!(
        titles(&user_top_level_pages(&doc)),
        vec!["Interface", "Reading"]
    );
}

#[test]
fn missing_root_page_has_no_pages() {
    let doc = ConfigDocument::from_xml("<config/>", "P", "R", "P").unwrap();
    assert!(top_level_pages(&doc).is_empty());
}

#[test]
fn outline_copies_subtree() {
    let doc = doc_with_pages(
        "Widget-100",
        r#"<page title="Interface"><page title="RS232" protection="FACTORY"/></page>"#,
    );
    let outline = top_level_pages(&doc)[0].to_outline();
    assert_eq!(outline.title.as_deref(), Some("Interface"));
    assert_eq!(outline.children.len(), 1);
    assert_eq!(outline.children[0].protection, Some(Protection::Factory));
}
