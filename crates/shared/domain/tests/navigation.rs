use fhub_domain::firm::FirmType;
use fhub_domain::navigation::{
    NavItem, NavModule, NavSection, SidebarConfig, SidebarSections,
};
use serde_json::json;

fn item(id: &str, order: u32) -> NavItem {
    NavItem {
        id: id.into(),
        label: format!("sidebar.{id}"),
        label_ar: "تجربة".into(),
        icon: "circle".into(),
        path: format!("/dashboard/{id}"),
        order,
    }
}

#[test]
fn sidebar_config_serializes_camel_case() {
    let sections = SidebarSections {
        basic: NavSection {
            label: "sidebar.basic".into(),
            label_ar: "الرئيسية".into(),
            items: vec![item("dashboard", 1)],
        },
        modules: NavSection {
            label: "sidebar.modules".into(),
            label_ar: "الوحدات".into(),
            items: vec![NavModule {
                id: "billing".into(),
                label: "sidebar.billing".into(),
                label_ar: "الفوترة".into(),
                icon: "dollar-sign".into(),
                order: 4,
                items: vec![item("invoices", 1), item("payments", 2)],
                is_optional: false,
            }],
        },
        other: NavSection {
            label: "sidebar.other".into(),
            label_ar: "أخرى".into(),
            items: vec![item("settings", 1)],
        },
    };
    let meta = sections.compute_meta();
    let config =
        SidebarConfig { firm_type: FirmType::Solo, language: "ar".into(), sections, meta };

    let value = serde_json::to_value(&config).expect("serialize sidebar");
    assert_eq!(value["firmType"], json!("solo"));
    assert_eq!(value["sections"]["basic"]["labelAr"], json!("الرئيسية"));
    assert_eq!(value["sections"]["modules"]["items"][0]["isOptional"], json!(false));
    assert_eq!(value["meta"]["totalBaseItems"], json!(1));
    assert_eq!(value["meta"]["totalModuleItems"], json!(2));
    assert_eq!(value["meta"]["totalItems"], json!(4));

    let back: SidebarConfig = serde_json::from_value(value).expect("deserialize sidebar");
    assert_eq!(back, config);
}

#[test]
fn compute_meta_counts_every_collection() {
    let sections = SidebarSections {
        basic: NavSection {
            label: "sidebar.basic".into(),
            label_ar: "الرئيسية".into(),
            items: vec![item("dashboard", 1), item("calendar", 2)],
        },
        modules: NavSection {
            label: "sidebar.modules".into(),
            label_ar: "الوحدات".into(),
            items: vec![
                NavModule {
                    id: "documents".into(),
                    label: "sidebar.documents".into(),
                    label_ar: "المستندات".into(),
                    icon: "folder".into(),
                    order: 7,
                    items: vec![item("files", 1)],
                    is_optional: false,
                },
                NavModule {
                    id: "hr".into(),
                    label: "sidebar.hr".into(),
                    label_ar: "الموارد البشرية".into(),
                    icon: "user-cog".into(),
                    order: 6,
                    items: vec![item("employees", 1), item("payroll", 2), item("leave", 3)],
                    is_optional: false,
                },
            ],
        },
        other: NavSection {
            label: "sidebar.other".into(),
            label_ar: "أخرى".into(),
            items: vec![item("settings", 1), item("helpCenter", 2)],
        },
    };

    let meta = sections.compute_meta();
    assert_eq!(meta.total_base_items, 2);
    assert_eq!(meta.total_modules, 2);
    assert_eq!(meta.total_module_items, 4);
    assert_eq!(meta.total_items, 2 + 2 + 4);
}

#[test]
fn firm_type_parses_only_declared_values() {
    assert_eq!(FirmType::parse("solo"), Some(FirmType::Solo));
    assert_eq!(FirmType::parse("small"), Some(FirmType::Small));
    assert_eq!(FirmType::parse("large"), Some(FirmType::Large));
    assert_eq!(FirmType::parse("enterprise"), None);
    assert_eq!(FirmType::parse("Solo"), None);
    assert_eq!(FirmType::parse(""), None);
}

#[test]
fn firm_type_serde_uses_lowercase_strings() {
    for firm_type in FirmType::ALL {
        let value = serde_json::to_value(firm_type).unwrap();
        assert_eq!(value, json!(firm_type.as_str()));
        let back: FirmType = serde_json::from_value(value).unwrap();
        assert_eq!(back, firm_type);
    }
}
