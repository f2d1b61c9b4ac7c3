use std::fs;
use std::path::Path;

use modmine_core::{Config, MineError, ModuleMiner};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_module() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "Manifest",
        r#"
name 'acme-demo'
version '1.0.0'
license 'Apache-2.0'
author 'Acme'
summary "Demo module"
project_page 'https://example.org'
"#,
    );

    write(
        root,
        "types/widget.rb",
        r#"
Puppet::Type.newtype(:widget) do
  @doc = "X"

  feature :f, "F"

  newparam(:a) do
    desc "A"
  end

  newproperty(:b) do
    desc "B"
  end
end
"#,
    );

    write(
        root,
        "types/gadget.rb",
        "Puppet::Type.newtype(:gadget) do\n  @doc = \"G\"\nend\n",
    );

    write(
        root,
        "providers/widget/p1.rb",
        r#"
Puppet::Type.type(:widget).provide(:p1) do
  @doc = "PDOC"
  has_feature :f1
  has_feature :f2
end
"#,
    );

    write(
        root,
        "providers/widget/p0.rb",
        "Puppet::Type.type(:widget).provide(:p0) do\nend\n",
    );

    dir
}

#[test]
fn test_mine_sample_module() {
    let dir = sample_module();
    let document = ModuleMiner::new(dir.path()).mine().unwrap();

    assert_eq!(document.name.as_deref(), Some("acme-demo"));
    assert_eq!(document.version.as_deref(), Some("1.0.0"));
    assert_eq!(document.license.as_deref(), Some("Apache-2.0"));
    assert_eq!(document.author.as_deref(), Some("Acme"));
    assert_eq!(document.summary.as_deref(), Some("Demo module"));
    assert!(document.source.is_none());
    assert!(document.dependencies.is_none());
    assert!(document.checksums.is_empty());

    let names: Vec<&str> = document.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["gadget", "widget"]);

    let widget = document.type_named("widget").unwrap();
    assert_eq!(widget.doc.as_deref(), Some("X"));
    assert_eq!(widget.parameters.get("a"), Some("A"));
    assert_eq!(widget.properties.get("b"), Some("B"));
    assert_eq!(widget.features.get("f"), Some("F"));

    let providers: Vec<&str> = widget.providers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(providers, vec!["p0", "p1"]);
    assert!(widget.providers[0].doc.is_none());
    assert_eq!(widget.providers[1].doc.as_deref(), Some("PDOC"));
    assert_eq!(widget.providers[1].features, vec!["f1", "f2"]);

    assert!(document.type_named("gadget").unwrap().providers.is_empty());
}

#[test]
fn test_json_shape() {
    let dir = sample_module();
    let json = ModuleMiner::new(dir.path()).mine().unwrap().to_json(false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for key in [
        "dependencies",
        "summary",
        "description",
        "version",
        "license",
        "author",
        "source",
        "name",
        "checksums",
        "types",
    ] {
        assert!(keys.contains(&key), "missing key {}", key);
    }
    assert!(!keys.contains(&"project_page"));
    assert!(value["source"].is_null());
    assert_eq!(value["checksums"], serde_json::json!({}));

    let widget = &value["types"][1];
    assert_eq!(widget["name"], "widget");
    assert_eq!(
        widget["parameters"],
        serde_json::json!([{ "name": "a", "doc": "A" }])
    );
    assert_eq!(widget["providers"][1]["features"], serde_json::json!(["f1", "f2"]));
}

#[test]
fn test_output_is_deterministic() {
    let dir = sample_module();
    let first = ModuleMiner::new(dir.path()).mine().unwrap().to_json(true).unwrap();
    let second = ModuleMiner::new(dir.path()).mine().unwrap().to_json(true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_module_root() {
    let dir = TempDir::new().unwrap();
    let err = ModuleMiner::new(dir.path().join("absent")).mine().unwrap_err();
    assert!(matches!(err, MineError::ModuleNotFound(_)));
}

#[test]
fn test_empty_module() {
    let dir = TempDir::new().unwrap();
    let document = ModuleMiner::new(dir.path()).mine().unwrap();
    assert!(document.name.is_none());
    assert!(document.types.is_empty());
}

#[test]
fn test_parse_error_aborts_run() {
    let dir = sample_module();
    write(
        dir.path(),
        "types/broken.rb",
        "Puppet::Type.newtype(:broken) do\n  newparam(:x) do\n",
    );

    let err = ModuleMiner::new(dir.path()).mine().unwrap_err();
    assert!(matches!(err, MineError::Parse(_)));
    assert!(err.to_string().contains("broken.rb"));
}

#[test]
fn test_parse_error_in_provider_aborts_run() {
    let dir = sample_module();
    write(dir.path(), "providers/widget/bad.rb", "def (\n");

    let err = ModuleMiner::new(dir.path()).mine().unwrap_err();
    assert!(matches!(err, MineError::Parse(_)));
}

#[test]
fn test_missing_anchor_skipped_by_default() {
    let dir = sample_module();
    write(dir.path(), "types/helper.rb", "module Helper\n  def self.run; end\nend\n");

    let document = ModuleMiner::new(dir.path()).mine().unwrap();
    let helper = document.type_named("helper").unwrap();
    assert!(helper.doc.is_none());
    assert!(helper.parameters.is_empty());
    assert!(helper.properties.is_empty());
    assert!(helper.features.is_empty());
}

#[test]
fn test_missing_anchor_aborts_in_strict_mode() {
    let dir = sample_module();
    write(dir.path(), "types/helper.rb", "module Helper\nend\n");

    let mut config = Config::default();
    config.extraction.strict_anchors = true;

    let err = ModuleMiner::with_config(dir.path(), &config).mine().unwrap_err();
    assert!(matches!(err, MineError::Extract(_)));
}

#[test]
fn test_custom_layout() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "lib/puppet/type/thing.rb",
        "Puppet::Type.newtype(:thing) do\n  @doc = \"T\"\nend\n",
    );
    write(dir.path(), "lib/puppet/type/README.md", "not ruby\n");
    write(
        dir.path(),
        "lib/puppet/provider/thing/posix.rb",
        "Puppet::Type.type(:thing).provide(:posix) do\n  has_feature :manages\nend\n",
    );
    write(dir.path(), "metadata.rb", "name 'custom'\n");

    let config = Config::from_toml(
        r#"
[layout]
types_dir = "lib/puppet/type"
providers_dir = "lib/puppet/provider"
manifest_file = "metadata.rb"
extensions = ["rb"]
"#,
    )
    .unwrap();

    let document = ModuleMiner::with_config(dir.path(), &config).mine().unwrap();
    assert_eq!(document.name.as_deref(), Some("custom"));
    assert_eq!(document.types.len(), 1);
    assert_eq!(document.types[0].doc.as_deref(), Some("T"));
    assert_eq!(document.types[0].providers[0].features, vec!["manages"]);
}

#[test]
fn test_manifest_without_literal_entries() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Manifest", "name computed_name\nversion VERSION\n");

    let document = ModuleMiner::new(dir.path()).mine().unwrap();
    assert!(document.name.is_none());
    assert!(document.version.is_none());
}
