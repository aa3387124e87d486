//! End-to-end Razor view conversion.

use migratemap::commands::{handle_convert, ConvertConfig};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn views_become_components_with_a_report() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Views/Orders/Index.cshtml",
        r#"@model Shop.Models.Order

<h1>Order @Model.Id</h1>
@Html.TextBoxFor(m => m.Customer)
@Html.AntiForgeryToken()
"#,
    );
    write(
        dir.path(),
        "Views/Orders/order_details.cshtml",
        "<div class=\"detail\">@Model.Total</div>\n",
    );
    let out = dir.path().join("converted");

    handle_convert(ConvertConfig {
        path: dir.path().to_path_buf(),
        output: out.clone(),
    })
    .unwrap();

    let index = fs::read_to_string(out.join("Views/Orders/Index.jsx")).unwrap();
    assert!(index.contains("import React from 'react';"));
    assert!(index.contains("const Index = (props) =>"));
    assert!(index.contains("{props.Id}"));
    assert!(index.contains("const handleChange"));
    assert!(index.contains("{/* TODO: Add CSRF token */}"));

    let details = fs::read_to_string(out.join("Views/Orders/OrderDetails.jsx")).unwrap();
    assert!(details.contains("const OrderDetails = (props) =>"));
    assert!(details.contains("className=\"detail\""));
    assert!(details.contains("{props.Total}"));

    let report = fs::read_to_string(out.join("CONVERSION_REPORT.md")).unwrap();
    assert!(report.contains("Views converted: 2"));
    assert!(report.contains("## Manual Review Checklist"));
    assert!(report.contains("`Index.jsx` (1 TODO"));
}

#[test]
fn same_named_views_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Views/Orders/Index.cshtml", "<h1>orders</h1>\n");
    write(dir.path(), "Views/Customers/Index.cshtml", "<h1>customers</h1>\n");
    let out = dir.path().join("converted");

    handle_convert(ConvertConfig {
        path: dir.path().to_path_buf(),
        output: out.clone(),
    })
    .unwrap();

    assert!(out.join("Views/Orders/Index.jsx").exists());
    assert!(out.join("Views/Customers/Index.jsx").exists());
}

#[test]
fn a_single_view_file_converts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Edit.cshtml", "<p>@Model.Total</p>\n");
    let out = dir.path().join("converted");

    handle_convert(ConvertConfig {
        path: dir.path().join("Edit.cshtml"),
        output: out.clone(),
    })
    .unwrap();

    let jsx = fs::read_to_string(out.join("Edit.jsx")).unwrap();
    assert!(jsx.contains("{props.Total}"));
}

#[test]
fn empty_tree_still_writes_a_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    let out = dir.path().join("converted");

    handle_convert(ConvertConfig {
        path: dir.path().to_path_buf(),
        output: out.clone(),
    })
    .unwrap();

    let report = fs::read_to_string(out.join("CONVERSION_REPORT.md")).unwrap();
    assert!(report.contains("Views converted: 0"));
}
