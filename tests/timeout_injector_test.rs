// Tests for the HTTP timeout injection pass (pure rewrite + file round-trip)
use flutter_maintenance_tools::timeout_injector::{inject_timeouts, run};

/// 生成用例中的一行源文本。
#[derive(Debug, Clone)]
enum Line {
    /// 与模式无关的普通代码行
    Plain(String),
    /// HTTP 请求语句；`protected` 表示已带超时调用
    Call {
        verb: String,
        arg: String,
        protected: bool,
    },
}

impl Line {
    fn text(&self) -> String {
        match self {
            Line::Plain(s) => s.clone(),
            Line::Call {
                verb,
                arg,
                protected,
            } => {
                if *protected {
                    format!("await http.{}({}).timeout(ApiConfig.timeout);", verb, arg)
                } else {
                    format!("await http.{}({});", verb, arg)
                }
            }
        }
    }

    fn is_call(&self) -> bool {
        matches!(self, Line::Call { .. })
    }

    fn is_unprotected(&self) -> bool {
        matches!(self, Line::Call { protected: false, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;

    const SAMPLE_SERVICE: &str = "\
class ApiService {
  Future<List<Product>> fetchProducts() async {
    final response = await http.get(Uri.parse('$baseUrl/products'));
    return parseProducts(response.body);
  }

  Future<void> submitOrder(Order order) async {
    await http.post(Uri.parse('$baseUrl/orders'), body: order.toJson()).timeout(ApiConfig.timeout);
  }
}
";

    #[test]
    fn test_run_rewrites_file_in_place() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("api_service.dart");
        fs::write(&path, SAMPLE_SERVICE).expect("write sample");

        let injected = run(&path).expect("run injector");
        assert_eq!(injected, 1);

        let rewritten = fs::read_to_string(&path).expect("read back");
        assert!(rewritten.contains(
            "await http.get(Uri.parse('$baseUrl/products')).timeout(ApiConfig.timeout);"
        ));
        // 已保护的语句保持原样
        assert!(rewritten.contains(
            "await http.post(Uri.parse('$baseUrl/orders'), body: order.toJson()).timeout(ApiConfig.timeout);"
        ));
    }

    #[test]
    fn test_run_twice_is_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("api_service.dart");
        fs::write(&path, SAMPLE_SERVICE).expect("write sample");

        run(&path).expect("first pass");
        let after_first = fs::read_to_string(&path).expect("read back");

        let injected = run(&path).expect("second pass");
        assert_eq!(injected, 0);
        let after_second = fs::read_to_string(&path).expect("read back");
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_run_without_matches_keeps_file_identical() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("api_service.dart");
        let source = "class ApiService {\n  // 尚无请求\n}\n";
        fs::write(&path, source).expect("write sample");

        let injected = run(&path).expect("run injector");
        assert_eq!(injected, 0);
        assert_eq!(fs::read_to_string(&path).expect("read back"), source);
    }

    #[test]
    fn test_run_missing_file_propagates_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("does_not_exist.dart");

        let err = run(&path).expect_err("missing file must fail");
        assert!(matches!(
            err,
            flutter_maintenance_tools::error::AppError::Io(_)
        ));
    }

    fn line_strategy() -> impl Strategy<Value = Line> {
        let verb = prop::sample::select(vec!["get", "post", "put", "delete", "patch"]);
        prop_oneof![
            // 普通行：字符集不含括号与分号，必然不会被模式命中
            "[A-Za-z0-9_ ]{0,30}".prop_map(Line::Plain),
            (verb, "[A-Za-z0-9_'$/. ]{1,24}", any::<bool>()).prop_map(|(verb, arg, protected)| {
                Line::Call {
                    verb: verb.to_string(),
                    arg,
                    protected,
                }
            }),
        ]
    }

    proptest! {
        /// 一遍注入后每条请求语句恰有一个 timeout；二遍注入不再变化。
        #[test]
        fn prop_single_timeout_and_idempotence(
            lines in prop::collection::vec(line_strategy(), 0..8)
        ) {
            let content = lines
                .iter()
                .map(Line::text)
                .collect::<Vec<_>>()
                .join("\n");

            let (once, injected) = inject_timeouts(&content);
            prop_assert_eq!(injected, lines.iter().filter(|l| l.is_unprotected()).count());
            prop_assert_eq!(
                once.matches(".timeout(").count(),
                lines.iter().filter(|l| l.is_call()).count()
            );

            let (twice, second) = inject_timeouts(&once);
            prop_assert_eq!(second, 0);
            prop_assert_eq!(&once, &twice);
        }
    }
}
