//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage, so the built-in chain costs nothing to build per call.
//! DynamicProcess is the dynamic fallback for caller-supplied stages.
use crate::{context::Context, error::ValidationError, stage::Stage};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError>;

    /// Append `stage` to the chain; it runs after every stage already in it.
    #[inline(always)]
    fn then<S: Stage>(self, stage: S) -> ChainedProcess<S, Self>
    where
        Self: Sized,
    {
        ChainedProcess {
            stage,
            previous: self,
        }
    }
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        let current = self.previous.process(text, ctx)?;
        apply_stage(&self.stage, current, ctx)
    }
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stages.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ValidationError> {
        for stage in &self.stages {
            text = apply_stage(&**stage, text, ctx)?;
        }
        Ok(text)
    }
}

#[inline(always)]
fn apply_stage<'a, S: Stage + ?Sized>(
    stage: &S,
    text: Cow<'a, str>,
    ctx: &Context<'_>,
) -> Result<Cow<'a, str>, ValidationError> {
    if !stage.needs_apply(&text, ctx)? {
        return Ok(text);
    }
    trace!(stage = stage.name(), "applying stage");
    stage.apply(text, ctx)
}
