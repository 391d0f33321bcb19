//! Fixture graph: named setup/teardown units resolved per test execution
//!
//! A fixture is a named unit with optional dependencies, an async setup
//! that yields a value, and an optional teardown captured at setup time.
//! The graph resolves a requested set into dependency order, runs setups
//! exactly once each, hands the yielded values to the test body, and tears
//! down in strict reverse order of setup completion regardless of the body
//! outcome.
//!
//! A fixture's logic is split at its yield point into two explicit
//! closures: the setup produces the value, the teardown captures whatever
//! it needs from that value. The graph stores the teardown alongside the
//! instance and invokes it explicitly during [`FixtureGraph::teardown_all`].

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::error::{HarnessError, Result};

/// A value yielded by a fixture setup, shared with dependents and the body.
pub type FixtureValue = Arc<dyn Any + Send + Sync>;

/// Teardown closure captured at setup time. Runs at most once.
pub type TeardownFn = Box<dyn FnOnce() -> BoxFuture<'static, Result<()>> + Send>;

type SetupFn<C> =
    Arc<dyn Fn(C, FixtureDeps) -> BoxFuture<'static, Result<SetupOutcome>> + Send + Sync>;

/// What a fixture setup hands back: the yielded value and the code that
/// runs after the yield point.
pub struct SetupOutcome {
    value: FixtureValue,
    teardown: Option<TeardownFn>,
}

impl SetupOutcome {
    /// Yield a value with no teardown.
    pub fn yielding<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            teardown: None,
        }
    }

    /// Yield nothing; useful for fixtures that only exist for their
    /// side effects or their teardown.
    pub fn unit() -> Self {
        Self::yielding(())
    }

    /// Attach the code after the yield point.
    pub fn on_teardown<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.teardown = Some(Box::new(move || Box::pin(f())));
        self
    }
}

/// Resolved fixture values, keyed by fixture name.
#[derive(Clone, Default)]
pub struct FixtureDeps {
    values: HashMap<String, FixtureValue>,
}

impl std::fmt::Debug for FixtureDeps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureDeps")
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FixtureDeps {
    /// Downcast the named fixture's yielded value.
    pub fn get<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| HarnessError::UnknownFixture(name.to_string()))?;
        value
            .clone()
            .downcast::<T>()
            .map_err(|_| HarnessError::FixtureValue {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    fn insert(&mut self, name: &str, value: FixtureValue) {
        self.values.insert(name.to_string(), value);
    }
}

struct FixtureDef<C> {
    deps: Vec<String>,
    setup: SetupFn<C>,
}

/// Named fixture definitions shared across test executions.
pub struct FixtureRegistry<C> {
    defs: HashMap<String, FixtureDef<C>>,
}

impl<C> Default for FixtureRegistry<C> {
    fn default() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }
}

impl<C: Clone + Send + Sync + 'static> FixtureRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a fixture. The setup receives the per-test context and the
    /// already-resolved values of its declared dependencies.
    pub fn define<F, Fut>(&mut self, name: &str, deps: &[&str], setup: F)
    where
        F: Fn(C, FixtureDeps) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<SetupOutcome>> + Send + 'static,
    {
        let setup: SetupFn<C> = Arc::new(move |ctx, deps| Box::pin(setup(ctx, deps)));
        self.defs.insert(
            name.to_string(),
            FixtureDef {
                deps: deps.iter().map(|d| d.to_string()).collect(),
                setup,
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }
}

/// Lifecycle phase of a fixture instance within one test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    SettingUp,
    Ready,
    SetupFailed,
    TearingDown,
    Done,
}

struct FixtureInstance {
    phase: Phase,
    value: Option<FixtureValue>,
    teardown: Option<TeardownFn>,
}

impl FixtureInstance {
    fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            value: None,
            teardown: None,
        }
    }
}

/// Per-test-execution realization of the registry. Exclusively owned by one
/// test execution; never shared across concurrent tests.
pub struct FixtureGraph<'r, C> {
    registry: &'r FixtureRegistry<C>,
    ctx: C,
    instances: HashMap<String, FixtureInstance>,
    completion_order: Vec<String>,
    teardown_failures: usize,
}

impl<'r, C: Clone + Send + Sync + 'static> FixtureGraph<'r, C> {
    pub fn new(registry: &'r FixtureRegistry<C>, ctx: C) -> Self {
        Self {
            registry,
            ctx,
            instances: HashMap::new(),
            completion_order: Vec::new(),
            teardown_failures: 0,
        }
    }

    /// Resolve the named fixtures and their transitive dependencies.
    ///
    /// The dependency closure is validated (unknown names, cycles) before
    /// any setup side effect runs. Setups execute in dependency order and
    /// are memoized: a fixture referenced by several dependents is set up
    /// exactly once per execution. On a setup failure no further setups
    /// run; fixtures that completed remain registered for teardown.
    pub async fn resolve(&mut self, names: &[&str]) -> Result<FixtureDeps> {
        let order = self.setup_order(names)?;

        for name in order {
            let ready = self
                .instances
                .get(&name)
                .map(|i| i.phase == Phase::Ready)
                .unwrap_or(false);
            if ready {
                continue;
            }

            // Known to exist: setup_order validated every name.
            let def = &self.registry.defs[&name];
            let setup = def.setup.clone();
            let dep_names = def.deps.clone();

            let mut dep_values = FixtureDeps::default();
            for dep in &dep_names {
                let value = self.instances[dep]
                    .value
                    .clone()
                    .expect("dependency set up before dependent");
                dep_values.insert(dep, value);
            }

            let instance = self
                .instances
                .entry(name.clone())
                .or_insert_with(FixtureInstance::new);
            instance.phase = Phase::SettingUp;

            debug!(fixture = %name, "fixture setup");
            match setup(self.ctx.clone(), dep_values).await {
                Ok(outcome) => {
                    let instance = self.instances.get_mut(&name).expect("instance inserted");
                    instance.value = Some(outcome.value);
                    instance.teardown = outcome.teardown;
                    instance.phase = Phase::Ready;
                    self.completion_order.push(name);
                }
                Err(e) => {
                    let instance = self.instances.get_mut(&name).expect("instance inserted");
                    instance.phase = Phase::SetupFailed;
                    return Err(HarnessError::setup_failure(name, e));
                }
            }
        }

        let mut resolved = FixtureDeps::default();
        for name in names {
            let value = self.instances[*name]
                .value
                .clone()
                .expect("requested fixture is Ready");
            resolved.insert(name, value);
        }
        Ok(resolved)
    }

    /// Tear down every fixture whose setup completed, in strict reverse
    /// order of setup completion. A teardown failure is logged and counted
    /// but never stops the remaining teardowns; the discipline here is
    /// forward progress, not all-or-nothing.
    pub async fn teardown_all(&mut self) {
        let order: Vec<String> = self.completion_order.drain(..).rev().collect();

        for name in order {
            let instance = self.instances.get_mut(&name).expect("completed instance");
            instance.phase = Phase::TearingDown;
            let teardown = instance.teardown.take();

            if let Some(teardown) = teardown {
                debug!(fixture = %name, "fixture teardown");
                if let Err(e) = teardown().await {
                    warn!(fixture = %name, error = %e, "fixture teardown failed");
                    self.teardown_failures += 1;
                }
            }

            let instance = self.instances.get_mut(&name).expect("completed instance");
            instance.phase = Phase::Done;
        }

        // Instances that never reached Ready still finish their lifecycle.
        for instance in self.instances.values_mut() {
            if instance.phase != Phase::Done {
                instance.phase = Phase::Done;
            }
        }
    }

    /// Current lifecycle phase of a fixture instance, if one exists.
    pub fn phase(&self, name: &str) -> Option<Phase> {
        self.instances.get(name).map(|i| i.phase)
    }

    /// Number of teardowns that failed (logged, never escalated).
    pub fn teardown_failures(&self) -> usize {
        self.teardown_failures
    }

    /// Resolve, run the body, and tear down regardless of outcome.
    ///
    /// A setup failure skips the body; a body failure is returned after
    /// every completed fixture has been torn down.
    pub async fn run<T, F, Fut>(
        registry: &'r FixtureRegistry<C>,
        ctx: C,
        names: &[&str],
        body: F,
    ) -> Result<T>
    where
        F: FnOnce(FixtureDeps) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut graph = FixtureGraph::new(registry, ctx);
        let result = match graph.resolve(names).await {
            Ok(deps) => body(deps).await,
            Err(e) => Err(e),
        };
        graph.teardown_all().await;
        result
    }

    /// Compute a topological setup order for the requested names.
    ///
    /// Depth-first traversal with a recursion-stack check; rejects unknown
    /// names and cycles before any side effect.
    fn setup_order(&self, names: &[&str]) -> Result<Vec<String>> {
        let mut order = Vec::new();
        let mut visited: HashMap<String, bool> = HashMap::new(); // false = on stack
        let mut stack: Vec<String> = Vec::new();

        fn visit<C>(
            registry: &FixtureRegistry<C>,
            name: &str,
            visited: &mut HashMap<String, bool>,
            stack: &mut Vec<String>,
            order: &mut Vec<String>,
        ) -> Result<()> {
            match visited.get(name) {
                Some(true) => return Ok(()),
                Some(false) => {
                    let start = stack.iter().position(|n| n == name).unwrap_or(0);
                    let mut chain: Vec<&str> = stack[start..].iter().map(|s| s.as_str()).collect();
                    chain.push(name);
                    return Err(HarnessError::CyclicDependency {
                        chain: chain.join(" -> "),
                    });
                }
                None => {}
            }

            let def = registry
                .defs
                .get(name)
                .ok_or_else(|| HarnessError::UnknownFixture(name.to_string()))?;

            visited.insert(name.to_string(), false);
            stack.push(name.to_string());
            for dep in &def.deps {
                visit(registry, dep, visited, stack, order)?;
            }
            stack.pop();
            visited.insert(name.to_string(), true);
            order.push(name.to_string());
            Ok(())
        }

        for name in names {
            visit(self.registry, name, &mut visited, &mut stack, &mut order)?;
        }
        Ok(order)
    }
}
