use std::sync::Arc;

use log::debug;
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;
use crate::shapes::selection::Selection;
use crate::shapes::symmetric_shape::SymmetricShape;
use crate::symmetries::classification::{
    explain_matrix, AxisRotation, PlaneReflection, TransformationClassification,
};
use crate::symmetries::motion::Motion;
use crate::Result;

/// How a performed motion should be animated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionPlan {
    Stay,
    Reflect {
        normal: Vector3<f64>,
    },
    Rotate {
        axis: Vector3<f64>,
        theta: f64,
    },
    /// Mirror first, then rotate
    Rotoreflect {
        reflection: PlaneReflection,
        rotation: AxisRotation,
    },
}

impl From<TransformationClassification> for MotionPlan {
    fn from(classification: TransformationClassification) -> Self {
        match classification {
            TransformationClassification::Identity => MotionPlan::Stay,
            TransformationClassification::Rotation(rotation) => MotionPlan::Rotate {
                axis: rotation.axis,
                theta: rotation.theta,
            },
            TransformationClassification::Reflection(reflection) => MotionPlan::Reflect {
                normal: reflection.normal,
            },
            TransformationClassification::Rotoreflection {
                rotation,
                reflection,
            } => MotionPlan::Rotoreflect {
                reflection,
                rotation,
            },
        }
    }
}

/// Result of appending a motion to the line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformedMotion {
    pub plan: MotionPlan,
    /// Accumulated transform before the step
    pub from: Matrix4<f64>,
    /// Accumulated transform after the step
    pub to: Matrix4<f64>,
}

/// Running composition of the motions a user has performed on one shape.
///
/// Every step is applied after everything before it; each prefix is one transformed copy.
#[derive(Debug, Clone)]
pub struct CongaLine {
    shape: Arc<SymmetricShape>,
    steps: Vec<Motion>,
    current: Motion,
}

impl CongaLine {
    pub fn new(shape: Arc<SymmetricShape>) -> Self {
        let current = shape.group().identity().clone();
        Self {
            shape,
            steps: Vec::new(),
            current,
        }
    }

    pub fn shape(&self) -> &SymmetricShape {
        &self.shape
    }

    /// Accumulated motion
    pub fn current(&self) -> &Motion {
        &self.current
    }

    pub fn current_matrix(&self) -> Result<Matrix4<f64>> {
        self.shape.matrix_of(&self.current)
    }

    pub fn steps(&self) -> &[Motion] {
        &self.steps
    }

    /// Composes `motion` after the accumulated motion
    pub fn perform(&mut self, motion: &Motion) -> Result<PerformedMotion> {
        if motion.len() != self.shape.vertices().len() {
            return Err(SymmetryError::DimensionMismatch {
                expected: self.shape.vertices().len(),
                found: motion.len(),
            });
        }

        let step_matrix = self.shape.matrix_of(motion)?;
        let plan = MotionPlan::from(explain_matrix(&step_matrix)?);

        let from = self.current_matrix()?;
        let next = motion.compose(&self.current)?;
        let to = self.shape.matrix_of(&next)?;

        debug!(
            "{}: step {} {:?} -> {:?}",
            self.shape.name(),
            self.steps.len() + 1,
            motion.permutation(),
            next.permutation()
        );

        self.steps.push(motion.clone());
        self.current = next;

        Ok(PerformedMotion { plan, from, to })
    }

    /// Performs the motion picked through an indicator
    pub fn perform_selection(
        &mut self,
        selection: &Selection,
        degrees: Option<i32>,
    ) -> Result<PerformedMotion> {
        let motion = selection.motion(&self.shape, degrees)?;
        self.perform(&motion)
    }

    /// Accumulated motion after each prefix of the line, starting with the identity
    pub fn copies(&self) -> Result<Vec<Motion>> {
        let mut copies = Vec::with_capacity(self.steps.len() + 1);
        let mut accumulated = self.shape.group().identity().clone();
        copies.push(accumulated.clone());

        for step in &self.steps {
            accumulated = step.compose(&accumulated)?;
            copies.push(accumulated.clone());
        }

        Ok(copies)
    }

    /// Drops the last step; `None` when the line is empty
    pub fn undo(&mut self) -> Result<Option<Motion>> {
        let Some(last) = self.steps.pop() else {
            return Ok(None);
        };
        self.current = last.invert().compose(&self.current)?;
        Ok(Some(last))
    }

    pub fn reset(&mut self) {
        self.steps.clear();
        self.current = self.shape.group().identity().clone();
    }
}
