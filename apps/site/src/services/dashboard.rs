use crate::fixtures::content::seed_workflow_steps;
use crate::models::WorkflowStep;

/// In-memory workflow steps behind the dashboard mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowBoard {
    steps: Vec<WorkflowStep>,
}

impl Default for WorkflowBoard {
    fn default() -> Self {
        Self::new(seed_workflow_steps())
    }
}

impl WorkflowBoard {
    pub fn new(steps: Vec<WorkflowStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    /// Flips `enabled` on the step with `id`. Returns `false` when no step has that id.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.steps.iter_mut().find(|step| step.id == id) {
            Some(step) => {
                step.enabled = !step.enabled;
                true
            }
            None => false,
        }
    }

    pub fn enabled_count(&self) -> usize {
        self.steps.iter().filter(|step| step.enabled).count()
    }
}
