//! Unit-test spec generation.
//!
//! Picks the richest template the tested file supports: a component with
//! a resolvable module gets a full test-module harness, an exported
//! class gets an injector test, and anything else falls back to a
//! classless or blank skeleton.

use std::path::{Path, PathBuf};

use eyre::Result;
use ngsmith_core::{
    component_name_parts, ensure_dot, find_modules, lower_camel_case, module_class_name,
    relative_to, selector_name,
};
use regex::RegexBuilder;

/// Which mock clock flavor the generated component test uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockClock {
    /// `asyncAwaitMockClock`, compatible with async/await test bodies.
    AsyncAwait,
    /// `fakeAsyncWrapper`, not compatible with async/await.
    FakeAsync,
}

/// A module that declares the class under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Dot-prefixed import path of the module, `.ts` stripped.
    pub module_path: String,
    /// The module's exported class name.
    pub module_name: String,
}

/// Dot-prefixed path from `filename`'s directory to the generated
/// provides manifest at the project root.
pub fn auto_provides_path(filename: &Path, ts_project_dir: &Path) -> String {
    let from = filename.parent().unwrap_or(Path::new(""));
    let relative = relative_to(from, ts_project_dir);

    if relative.is_empty() {
        ensure_dot("autoprovides.generated")
    } else {
        ensure_dot(&format!("{}/autoprovides.generated", relative))
    }
}

/// Find the module that declares `class_name`, searching the modules at
/// and above `filename`'s directory.
///
/// A module counts when its text mentions the class and it exports the
/// module class name derived from its own file stem.
pub fn find_module_for_class(
    filename: &Path,
    class_name: &str,
    prefix: &[String],
    root: &Path,
) -> Result<Option<ModuleInfo>> {
    let start = filename.parent().unwrap_or(Path::new(""));

    for module_path in find_modules(start, root)? {
        let text = std::fs::read_to_string(&module_path)?;

        if !text.contains(class_name) {
            continue;
        }

        let stem = module_file_stem(&module_path);
        let expected = module_class_name(prefix, &[stem]);
        let finder = RegexBuilder::new(&format!("export class ({})", regex::escape(&expected)))
            .case_insensitive(true)
            .build()
            .expect("escaped class name is a valid pattern");

        if let Some(captures) = finder.captures(&text) {
            let without_ts = module_path.with_extension("");
            let relative = relative_to(start, &without_ts);

            return Ok(Some(ModuleInfo {
                module_path: ensure_dot(&relative),
                module_name: captures[1].to_string(),
            }));
        }
    }

    Ok(None)
}

fn module_file_stem(module_path: &Path) -> String {
    let name = module_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".module.ts").unwrap_or(&name).to_string()
}

/// Skeleton test for files with nothing recognizable to hook into.
pub fn blank_test() -> String {
    r#"
describe(module.id, () => {
    it('should work', () => {
        // TODO write test code
    });
});"#
        .to_string()
}

/// Injector-backed test without a class under test.
pub fn classless_test(auto_provides_dir: &str) -> String {
    format!(
        r#"import {{setupInjector}} from '@lucid/testing/testsetup';

import {{mockProvides}} from '{auto_provides_dir}';

describe(module.id, () => {{
    it('should work', () => {{
        const injector = setupInjector(mockProvides);

        // TODO write test code
    }});
}});"#
    )
}

/// Injector-backed test for an exported class.
pub fn class_test(class_name: &str, filename: &Path, auto_provides_dir: &str) -> String {
    format!(
        r#"import {{setupInjector}} from '@lucid/testing/testsetup';

import {{{class_name}}} from './{module}';

import {{mockProvides}} from '{auto_provides_dir}';

describe(module.id, () => {{
    it('should work', () => {{
        const injector = setupInjector([
            mockProvides,
            // Providing the class here ensures that a mock version isn't injected instead
            {class_name},
        ]);

        const {instance} = injector.get({class_name});

        // TODO write test code
    }});
}});"#,
        module = import_stem(filename),
        instance = lower_camel_case(class_name),
    )
}

/// Component test run inside the component's own module.
pub fn component_test(
    class_name: &str,
    filename: &Path,
    auto_provides_dir: &str,
    module: &ModuleInfo,
    clock: MockClock,
) -> String {
    format!(
        r#"import {{TestEnvironment}} from '@lucid/ng2testing/testenvironment';
import {{testComponent, testModule}} from '@lucid/ng2testing/testmodule';
{clock_imports}

import {{{class_name}}} from './{stem}';

import {{{module_name}}} from '{module_path}';
import {{mockProvides, ngMockProvides}} from '{auto_provides_dir}';

describe(
    module.id,
    testModule(
        {{
            module: {module_name},
            lucidProvides: mockProvides,
            ngProvides: ngMockProvides,
        }},
        () => {{
            {body}
        }}
    )
);"#,
        clock_imports = mock_clock_imports(filename, clock),
        stem = import_stem(filename),
        module_name = module.module_name,
        module_path = module.module_path,
        body = test_body(class_name, clock),
    )
}

/// Component test wrapped in a generated test module with a host
/// template, for components that must be instantiated from markup.
pub fn component_test_with_test_module(
    class_name: &str,
    filename: &Path,
    auto_provides_dir: &str,
    module: &ModuleInfo,
    clock: MockClock,
    prefix: &[String],
) -> String {
    let name_parts = component_name_parts(class_name);
    let selector = selector_name(prefix, &name_parts);

    format!(
        r#"import {{Component, NgModule}} from '@angular/core';
import {{ng2AutoProvides}} from '@lucid/ng2testing/injector';
import {{TestEnvironment}} from '@lucid/ng2testing/testenvironment';
import {{testComponent, testModule}} from '@lucid/ng2testing/testmodule';
{clock_imports}

import {{{module_name}}} from '{module_path}';
import {{mockProvides, ngMockProvides}} from '{auto_provides_dir}';

@Component({{
    template: '<{selector}></{selector}>',
    providers: [
        ng2AutoProvides(mockProvides, ngMockProvides),
    ],
}})
class Test{class_name} {{
}}

@NgModule({{
    declarations: [Test{class_name}],
    imports: [{module_name}],
}})
class TestModule {{}}

describe(
    module.id,
    testModule(
        {{
            module: TestModule,
        }},
        () => {{
            {body}
        }}
    )
);"#,
        clock_imports = mock_clock_imports(filename, clock),
        module_name = module.module_name,
        module_path = module.module_path,
        body = test_body(&format!("Test{}", class_name), clock),
    )
}

fn test_body(class_name: &str, clock: MockClock) -> String {
    match clock {
        MockClock::AsyncAwait => format!(
            r#"it('should work', testComponent({{}}, async (testEnv: TestEnvironment) => {{
                await asyncAwaitMockClock(async mockClock => {{
                    const interactions = new AsyncMockInteractions(mockClock);
                    const fixture = testEnv.createComponent({class_name});
                    fixture.detectChanges();
                }});
            }}));"#
        ),
        MockClock::FakeAsync => format!(
            r#"it('should work', testComponent({{}}, (testEnv: TestEnvironment) => {{
                fakeAsyncWrapper((stabilize, mockClock) => {{
                    const fixture = testEnv.createComponent({class_name});
                    fixture.detectChanges();
                }})();
            }}));"#
        ),
    }
}

fn mock_clock_imports(filename: &Path, clock: MockClock) -> String {
    match clock {
        MockClock::AsyncAwait => "\
import {asyncAwaitMockClock} from '@lucid/pipelinedeps/test/asyncmockclock';
import {AsyncMockInteractions} from '@lucid/ng2testing/asyncmockinteractions';"
            .to_string(),
        MockClock::FakeAsync => {
            // Inside the ng2common tree the wrapper is imported by
            // relative path rather than through the package alias.
            let path_text = filename.to_string_lossy().replace('\\', "/");
            match path_text.find("ng2common") {
                None => "import {fakeAsyncWrapper} from '@lucid/ng2common/test/util';".to_string(),
                Some(at) => {
                    let util = PathBuf::from(format!("{}ng2common/test/util", &path_text[..at]));
                    let from = filename.parent().unwrap_or(Path::new(""));
                    let relative = ensure_dot(&relative_to(from, &util));
                    format!("import {{fakeAsyncWrapper}} from '{}';", relative)
                }
            }
        }
    }
}

fn import_stem(filename: &Path) -> String {
    let name = filename
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".ts").unwrap_or(&name).to_string()
}
