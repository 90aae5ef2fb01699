use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn missing_input_directory_is_a_clean_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("missing input directory"), "{stderr}");
    Ok(())
}

#[test]
fn unreadable_input_directory_aborts_the_run() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["-f", "does-not-exist"]).output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error:"), "{stderr}");
    Ok(())
}

#[test]
fn rewrites_a_tree_and_emits_the_language_pack() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        "app/views/home.vue",
        concat!(
            "<template>\n",
            "  <div class=\"page\">\n",
            "    <h1 title=\"首页\">欢迎</h1>\n",
            "    <p>{{count}}条新消息</p>\n",
            "  </div>\n",
            "</template>\n",
            "\n",
            "<script>\n",
            "export default {\n",
            "  methods: {\n",
            "    notify() {\n",
            "      this.$message('操作成功');\n",
            "    },\n",
            "  },\n",
            "};\n",
            "</script>\n",
            "\n",
            "<style scoped>\n",
            ".page { color: #333; }\n",
            "</style>\n",
        ),
    )?;
    test.write_file(
        "app/utils/msg.js",
        concat!(
            "export function hello(name) {\n",
            "  return `你好，${name}！`;\n",
            "}\n",
            "\n",
            "export const TITLE = '系统设置';\n",
            "// 注释：不要提取\n",
            "console.log('调试中文');\n",
        ),
    )?;
    test.write_file("app/readme.md", "说明文件，不应被改写\n")?;

    let output = test
        .command()
        .args(["-f", "app", "-i", "@/locales", "-d", "out"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let home = test.read_file("app/views/home.vue")?;
    let expected_home = concat!(
        "<template>\n",
        "  <div class=\"page\">\n",
        "    <h1 :title=\"$t('views_home_0')\">{{$t('views_home_1')}}</h1>\n",
        "    <p>{{$t('views_home_2', [count])}}</p>\n",
        "  </div>\n",
        "</template>\n",
        "\n",
        "<script>\n",
        "export default {\n",
        "  methods: {\n",
        "    notify() {\n",
        "      this.$message(this.$t('views_home_3'));\n",
        "    },\n",
        "  },\n",
        "};\n",
        "</script>\n",
        "\n",
        "<style scoped>\n",
        ".page { color: #333; }\n",
        "</style>\n",
    );
    assert_eq!(home, expected_home);

    let msg = test.read_file("app/utils/msg.js")?;
    let expected_msg = concat!(
        "import i18n from '@/locales'\n",
        "export function hello(name) {\n",
        "  return i18n.t('utils_msg_0', [name]);\n",
        "}\n",
        "\n",
        "export const TITLE = i18n.t('utils_msg_1');\n",
        "// 注释：不要提取\n",
        "console.log('调试中文');\n",
    );
    assert_eq!(msg, expected_msg);

    // Unrecognized extensions are never touched.
    assert_eq!(test.read_file("app/readme.md")?, "说明文件，不应被改写\n");

    let pack: Value = serde_json::from_str(&test.read_file("out/zh_cn.json")?)?;
    assert_eq!(
        pack,
        json!({
            "views_home_0": "首页",
            "views_home_1": "欢迎",
            "views_home_2": "{0}条新消息",
            "views_home_3": "操作成功",
            "utils_msg_0": "你好，{0}！",
            "utils_msg_1": "系统设置",
        })
    );

    Ok(())
}

#[test]
fn config_file_supplies_defaults_and_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".hankeyrc.json",
        r#"{
  "i18nPath": "~/locales/index",
  "outputDir": "packs",
  "ignores": ["vendor/**"]
}"#,
    )?;
    test.write_file("app/a.js", "const a = '你好';\n")?;
    test.write_file("app/vendor/b.js", "const b = '世界';\n")?;

    let output = test.command().args(["-f", "app"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_file("app/a.js")?,
        "import i18n from '~/locales/index'\nconst a = i18n.t('a_0');\n"
    );
    // Ignored paths are left byte-identical.
    assert_eq!(test.read_file("app/vendor/b.js")?, "const b = '世界';\n");

    let pack: Value = serde_json::from_str(&test.read_file("packs/zh_cn.json")?)?;
    assert_eq!(pack, json!({ "a_0": "你好" }));

    Ok(())
}

#[test]
fn identical_text_across_files_shares_one_key() -> Result<()> {
    let test = CliTest::new()?;

    // One top-level directory so traversal order within it cannot change
    // which keys exist, only which file coins the shared one.
    test.write_file("app/common/a.js", "const ok = '确定';\n")?;
    test.write_file("app/common/b.js", "const ok = '确定';\nconst no = '取消';\n")?;

    let output = test.command().args(["-f", "app", "-d", "out"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let pack: Value = serde_json::from_str(&test.read_file("out/zh_cn.json")?)?;
    let map = pack.as_object().unwrap();

    // Two distinct texts, two keys, whichever file was visited first.
    assert_eq!(map.len(), 2);
    let shared_key = map
        .iter()
        .find(|(_, v)| v.as_str() == Some("确定"))
        .unwrap()
        .0
        .clone();
    assert!(
        shared_key == "common_a_0" || shared_key == "common_b_0",
        "unexpected key {shared_key}"
    );

    // Both rewritten files reference the same key for the shared text.
    let a = test.read_file("app/common/a.js")?;
    let b = test.read_file("app/common/b.js")?;
    assert!(a.contains(&format!("i18n.t('{shared_key}')")), "{a}");
    assert!(b.contains(&format!("i18n.t('{shared_key}')")), "{b}");

    Ok(())
}

#[test]
fn language_pack_is_flushed_per_top_level_entry() -> Result<()> {
    let test = CliTest::new()?;

    // Two top-level entries; the pack file must exist and be complete
    // after the run, containing keys from both.
    test.write_file("app/one/a.js", "const a = '一';\n")?;
    test.write_file("app/two/b.js", "const b = '二';\n")?;

    let output = test.command().args(["-f", "app", "-d", "out"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let flushes = stdout.matches("language pack written").count();
    assert_eq!(flushes, 2, "{stdout}");

    let pack: Value = serde_json::from_str(&test.read_file("out/zh_cn.json")?)?;
    assert_eq!(pack, json!({ "one_a_0": "一", "two_b_0": "二" }));

    Ok(())
}
