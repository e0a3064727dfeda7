use aladdin_auto::model::{ParameterOption, ParameterType, Protection};
use aladdin_auto::{ConfigDocument, Error, NavigationPlan, resolve, resolve_all};

const WIDGET_XML: &str = include_str!("fixtures/config_Widget-100_DR001.xml");

fn widget() -> ConfigDocument {
    ConfigDocument::from_xml(WIDGET_XML, "Widget-100", "DR001", "Widget 100").expect("parse fixture")
}

#[test]
fn plain_parameter_copies_optional_attributes() {
    let doc = widget();
    let p = resolve(&doc, "0100").unwrap();
    assert_eq!(p.name, "baudRate");
    assert_eq!(p.param_type, ParameterType::Int);
    assert_eq!(p.code, "0100");
    assert_eq!(p.value, "9600");
    assert_eq!(p.display_name.as_deref(), Some("Baud Rate"));
    assert_eq!(p.send_to_device.as_deref(), Some("true"));
    assert_eq!(p.fill_char.as_deref(), Some("0"));
    assert_eq!(p.table_ref, None);
    // Unset stays unset when no enclosing page is protected.
    assert_eq!(p.protection, None);
}

#[test]
fn product_wrapper_title_is_elided_from_path() {
    let doc = widget();
    let p = resolve(&doc, "0100").unwrap();
    assert_eq!(p.parent_page_titles, vec!["Interface".to_string()]);
}

#[test]
fn command_code_is_stripped_and_uppercased() {
    let doc = widget();
    let p = resolve(&doc, "0012").unwrap();
    assert_eq!(p.param_type, ParameterType::Command);
    assert_eq!(p.declared_type, "command");
    assert_eq!(p.code, "012");
}

#[test]
fn parameter_without_field_has_empty_path() {
    let doc = widget();
    let p = resolve(&doc, "0012").unwrap();
    assert!(p.parent_page_titles.is_empty());
    assert!(!p.has_navigation_path());
    let err = NavigationPlan::for_parameter(&p).unwrap_err();
    assert!(matches!(err, Error::NoNavigationPath { .. }));
}

#[test]
fn disable_enable_int_and_inherited_protection() {
    let doc = widget();
    let p = resolve(&doc, "0200").unwrap();
    assert_eq!(p.param_type, ParameterType::DisableEnableInt);
    assert_eq!(
        p.parent_page_titles,
        vec!["Reading".to_string(), "Symbologies".to_string()]
    );
    assert_eq!(p.protection, Some(Protection::Factory));
    assert_eq!(
        p.options,
        vec![
            ParameterOption {
                name: "Disable".into(),
                value: "0".into(),
                command: Some("$cC300".into()),
            },
            ParameterOption {
                name: "Enable".into(),
                value: "1".into(),
                command: Some("$cC301".into()),
            },
        ]
    );
}

#[test]
fn explicit_protection_is_not_overridden() {
    let doc = widget();
    let p = resolve(&doc, "0201").unwrap();
    assert_eq!(p.protection, Some(Protection::Other("SERVICE".into())));
}

#[test]
fn disable_enable_enum_from_table() {
    let doc = widget();
    let p = resolve(&doc, "0300").unwrap();
    assert_eq!(p.param_type, ParameterType::DisableEnableEnum);
    assert_eq!(p.table_ref.as_deref(), Some("enDisTable"));
    assert!(p.table.is_some());
    assert_eq!(p.parent_page_titles, vec!["Beeper".to_string()]);
}

#[test]
fn enum_options_come_from_table() {
    let doc = widget();
    let p = resolve(&doc, "0301").unwrap();
    assert_eq!(p.param_type, ParameterType::Enum);
    let names: Vec<&str> = p.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Low", "Medium", "High"]);
    assert_eq!(p.options[2].value, "2");
    assert!(p.options.iter().all(|o| o.command.is_none()));
}

#[test]
fn unresolved_table_reference_is_not_fatal() {
    let doc = widget();
    let p = resolve(&doc, "0302").unwrap();
    assert_eq!(p.table_ref.as_deref(), Some("ledTable"));
    assert!(p.table.is_none());
    assert_eq!(p.param_type, ParameterType::Enum);
    assert!(p.options.is_empty());
    assert_eq!(p.parent_page_titles, vec!["Beeper".to_string()]);
}

#[test]
fn unknown_code_is_not_found() {
    let doc = widget();
    let err = resolve(&doc, "9999").unwrap_err();
    assert!(matches!(err, Error::ParameterNotFound { ref code } if code == "9999"));
}

#[test]
fn resolving_twice_is_identical() {
    let doc = widget();
    for code in ["0100", "0200", "0012", "0300", "0302"] {
        assert_eq!(resolve(&doc, code).unwrap(), resolve(&doc, code).unwrap());
    }
}

#[test]
fn resolve_all_follows_document_order() {
    let doc = widget();
    let names: Vec<String> = resolve_all(&doc).into_iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            "baudRate",
            "code39",
            "serviceLevel",
            "reset",
            "beeper",
            "beepVolume",
            "goodReadLed"
        ]
    );
}

#[test]
fn enabled_disabled_pair_in_either_order() {
    let xml = r#"<config>
  <rootPage><page title="Configuration"/></rootPage>
  <parameters>
    <parameter name="a" type="int" code="1" value="0">
      <value>Enabled</value>
      <value>Disabled</value>
    </parameter>
    <parameter name="b" type="int" code="2" value="0">
      <value>Disable</value>
      <value>Enable</value>
      <value>Auto</value>
    </parameter>
    <parameter name="c" type="string" code="3" value="0">
      <value>Disable</value>
      <value>Enable</value>
    </parameter>
  </parameters>
  <tableList/>
</config>"#;
    let doc = ConfigDocument::from_xml(xml, "P", "R", "P").unwrap();
    assert_eq!(resolve(&doc, "1").unwrap().param_type, ParameterType::DisableEnableInt);
    assert_eq!(resolve(&doc, "2").unwrap().param_type, ParameterType::Int);
    assert_eq!(
        resolve(&doc, "3").unwrap().param_type,
        ParameterType::Other("string".into())
    );
}

#[test]
fn nearest_protected_page_wins() {
    let xml = r#"<config>
  <rootPage>
    <page title="Configuration">
      <page title="Outer" protection="SERVICE">
        <page title="Inner" protection="FACTORY">
          <field name="x"/>
        </page>
      </page>
      <page title="Open" protection="USER">
        <field name="y"/>
      </page>
    </page>
  </rootPage>
  <parameters>
    <parameter name="x" type="int" code="1" value="0" protection="USER"/>
    <parameter name="y" type="int" code="2" value="0"/>
  </parameters>
</config>"#;
    let doc = ConfigDocument::from_xml(xml, "Prod-1", "R", "Prod-1").unwrap();
    let x = resolve(&doc, "1").unwrap();
    assert_eq!(x.protection, Some(Protection::Factory));
    assert_eq!(x.parent_page_titles, vec!["Outer".to_string(), "Inner".to_string()]);
    let y = resolve(&doc, "2").unwrap();
    assert_eq!(y.protection, None);
}

#[test]
fn unset_protection_is_not_inherited() {
    let xml = r#"<config>
  <rootPage>
    <page title="Configuration">
      <page title="Reading" protection="FACTORY">
        <field name="x"/>
      </page>
    </page>
  </rootPage>
  <parameters>
    <parameter name="x" type="int" code="1" value="0"/>
  </parameters>
</config>"#;
    let doc = ConfigDocument::from_xml(xml, "Prod-1", "R", "Prod-1").unwrap();
    let x = resolve(&doc, "1").unwrap();
    assert_eq!(x.protection, None);
    assert_eq!(x.parent_page_titles, vec!["Reading".to_string()]);
}
