use flash_fill::{
    field::{
        collector::{collect, derive_key, is_fillable},
        field_model::{ControlTag, UNKNOWN_KEY},
    },
    page::{
        page_model::{LabelFragment, PageControl},
        snapshot::SnapshotPage,
    },
};

use crate::common::utils::fixture;

mod common;

// =========================================================================
// Eligibility
// =========================================================================

#[test]
fn fixture_page_collects_only_fillable_controls() {
    let page = SnapshotPage::load(fixture("signup_form.json")).unwrap();
    let fields = collect(&page);

    let ids: Vec<usize> = fields.iter().map(|f| f.control.index()).collect();
    assert_eq!(
        ids,
        vec![0, 1, 2, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17],
        "submit, hidden, disabled and display:none controls must be skipped"
    );
}

#[test]
fn excluded_input_types_are_not_fillable() {
    for t in ["submit", "reset", "button", "image", "file", "hidden", " HIDDEN "] {
        assert!(!is_fillable(&PageControl::input(t)), "type {:?} should be excluded", t);
    }
    assert!(is_fillable(&PageControl::input("text")));
    assert!(is_fillable(&PageControl::new("textarea")));
    assert!(is_fillable(&PageControl::new("select")));
}

#[test]
fn non_form_tags_are_not_fillable() {
    assert!(!is_fillable(&PageControl::new("button")));
    assert!(!is_fillable(&PageControl::new("div")));
}

#[test]
fn disabled_controls_are_not_fillable() {
    let mut control = PageControl::input("text").with_name("email");
    control.disabled = true;
    assert!(!is_fillable(&control));
}

#[test]
fn display_none_on_ancestor_hides_control() {
    let mut control = PageControl::input("text").with_name("email");
    control.styles = vec!["".into(), "margin: 0".into(), "DISPLAY:None".into()];
    assert!(!is_fillable(&control));

    control.styles = vec!["display: block; visibility: hidden".into()];
    assert!(is_fillable(&control), "only display:none hides a control");
}

// =========================================================================
// Descriptor fields
// =========================================================================

#[test]
fn descriptor_type_and_tag_are_normalized() {
    let page = SnapshotPage::load(fixture("signup_form.json")).unwrap();
    let fields = collect(&page);

    let select = fields.iter().find(|f| f.key == "country").unwrap();
    assert_eq!(select.input_type, "select", "missing type falls back to tag name");
    assert_eq!(select.tag, ControlTag::Select);

    let upper = fields.iter().find(|f| f.control.index() == 17).unwrap();
    assert_eq!(upper.input_type, "email");
    assert_eq!(upper.tag, ControlTag::Input);
    assert_eq!(upper.key, "user_contact__email_");

    let range = fields.iter().find(|f| f.key == "volume").unwrap();
    assert_eq!(range.min, Some(10.0));
    assert_eq!(range.max, Some(20.0));

    let radio = fields.iter().find(|f| f.control.index() == 8).unwrap();
    assert!(radio.is_radio());
    assert_eq!(radio.group_name(), "gender");
}

#[test]
fn unparseable_bounds_are_absent() {
    let page = SnapshotPage::from_controls(vec![PageControl::input("range").with_name("r").with_bounds("low", " 7 ")]);
    let fields = collect(&page);
    assert_eq!(fields[0].min, None);
    assert_eq!(fields[0].max, Some(7.0));
}

// =========================================================================
// Key derivation precedence
// =========================================================================

fn full_control() -> PageControl {
    PageControl {
        tag: "input".into(),
        r#type: Some("text".into()),
        name: Some("Name[First]".into()),
        id: Some("IdKey".into()),
        placeholder: Some("Placeholder Key".into()),
        aria_label: Some("Aria Key".into()),
        data_label: Some("Data Key".into()),
        label_for: Some("For Label".into()),
        parent_label: vec![LabelFragment {
            text: "Parent Label".into(),
            control: false,
        }],
        legend: Some("Legend Key".into()),
        autocomplete: Some("given-name".into()),
        ..PageControl::default()
    }
}

#[test]
fn each_key_source_wins_over_later_ones() {
    let mut control = full_control();
    let expected = [
        "name_first_",
        "idkey",
        "placeholder key",
        "aria key",
        "data key",
        "for label",
        "parent label",
        "legend key",
        "given-name",
        UNKNOWN_KEY,
    ];

    for (step, want) in expected.iter().enumerate() {
        assert_eq!(derive_key(&control), *want, "step {}", step);
        match step {
            0 => control.name = None,
            1 => control.id = Some("   ".into()),
            2 => control.placeholder = None,
            3 => control.aria_label = None,
            4 => control.data_label = Some(String::new()),
            5 => control.label_for = None,
            6 => control.parent_label.clear(),
            7 => control.legend = None,
            8 => control.autocomplete = None,
            _ => {}
        }
    }
}

#[test]
fn parent_label_text_excludes_nested_control_text() {
    let control = PageControl {
        tag: "select".into(),
        parent_label: vec![
            LabelFragment {
                text: "  Preferred ".into(),
                control: false,
            },
            LabelFragment {
                text: "Red Green Blue".into(),
                control: true,
            },
            LabelFragment {
                text: "Colour ".into(),
                control: false,
            },
        ],
        ..PageControl::default()
    };
    assert_eq!(derive_key(&control), "preferred colour");
}

#[test]
fn label_for_text_is_trimmed_and_lowercased() {
    let page = SnapshotPage::load(fixture("signup_form.json")).unwrap();
    let fields = collect(&page);
    let company = fields.iter().find(|f| f.control.index() == 16).unwrap();
    assert_eq!(company.key, "company name");
}

#[test]
fn control_without_text_gets_unknown_key() {
    assert_eq!(derive_key(&PageControl::input("text")), "unknown");
}
