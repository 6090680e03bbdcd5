// SPDX-License-Identifier: MPL-2.0
//! Ordered attachment set for one shot.
//!
//! Every operation borrows the current collection and returns a new one, so a
//! failed call leaves the caller's snapshot untouched. After each successful
//! call the collection satisfies two rules:
//!
//! - `order` values are exactly `0..n-1` in display sequence,
//! - a non-empty collection has exactly one primary member.
//!
//! Both are restored by a full pass over the members rather than by patching
//! individual ranks.

use super::types::{Attachment, AttachmentId, CropData};
use crate::domain::error::{AttachmentError, ValidationError};
use std::collections::HashSet;

/// Ordered, primary-consistent set of attachments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttachmentCollection {
    /// Members in display order; `members[i].order == i`.
    members: Vec<Attachment>,
}

impl AttachmentCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a consistent collection from upstream records.
    ///
    /// Records are sorted by `order` (ties keep their input position) and
    /// re-ranked. The lowest-ordered primary flag wins; when none is set the
    /// first member is promoted.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::DuplicateId`] if two records share an id and
    /// [`AttachmentError::Validation`] if a record carries an invalid crop.
    pub fn from_records(records: Vec<Attachment>) -> Result<Self, AttachmentError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(AttachmentError::DuplicateId(record.id.clone()));
            }
            if let Some(crop) = &record.crop {
                validate_crop(crop)?;
            }
        }

        let mut members = records;
        members.sort_by_key(|attachment| attachment.order);

        let primary = members
            .iter()
            .position(|attachment| attachment.is_primary)
            .unwrap_or(0);
        for (index, attachment) in members.iter_mut().enumerate() {
            attachment.is_primary = index == primary;
        }

        Ok(Self::normalized(members))
    }

    /// Appends an attachment at the end of the display sequence.
    ///
    /// The first attachment of a collection becomes primary; later ones are
    /// never primary on insertion, whatever their incoming flag says.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::DuplicateId`] if the id is already present and
    /// [`AttachmentError::Validation`] if the attachment carries an invalid crop.
    pub fn add(&self, mut attachment: Attachment) -> Result<Self, AttachmentError> {
        if self.contains(&attachment.id) {
            return Err(AttachmentError::DuplicateId(attachment.id));
        }
        if let Some(crop) = &attachment.crop {
            validate_crop(crop)?;
        }

        attachment.order = self
            .members
            .iter()
            .map(|member| member.order)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        attachment.is_primary = self.members.is_empty();

        let mut members = self.members.clone();
        members.push(attachment);
        Ok(Self::normalized(members))
    }

    /// Removes a member and closes the order gap.
    ///
    /// If the removed member was primary, the member with the lowest remaining
    /// order takes over.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::NotFound`] if `id` is not a member.
    pub fn remove(&self, id: &AttachmentId) -> Result<Self, AttachmentError> {
        let index = self.require(id)?;
        let mut members = self.members.clone();
        let removed = members.remove(index);

        if removed.is_primary {
            if let Some(first) = members.first_mut() {
                first.is_primary = true;
            }
        }

        Ok(Self::normalized(members))
    }

    /// Makes `id` the single primary member.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::NotFound`] if `id` is not a member.
    pub fn set_primary(&self, id: &AttachmentId) -> Result<Self, AttachmentError> {
        self.require(id)?;
        let mut members = self.members.clone();
        for member in &mut members {
            member.is_primary = member.id == *id;
        }
        Ok(Self::normalized(members))
    }

    /// Moves `id` to `target_index` in the display sequence.
    ///
    /// `target_index` is clamped to `[0, n-1]`: drag sources routinely report
    /// transient positions outside the list, so those are not errors.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::NotFound`] if `id` is not a member.
    pub fn reorder(&self, id: &AttachmentId, target_index: isize) -> Result<Self, AttachmentError> {
        let from = self.require(id)?;
        let last = self.members.len() - 1;
        let to = usize::try_from(target_index.max(0)).map_or(last, |index| index.min(last));

        let mut members = self.members.clone();
        let moved = members.remove(from);
        members.insert(to, moved);
        Ok(Self::normalized(members))
    }

    /// Applies a terminal drag event "moved from index `from` to index `to`".
    ///
    /// A `from` index that no longer exists is ignored and the collection is
    /// returned unchanged, matching the leniency applied to `to`.
    #[must_use]
    pub fn move_by_index(&self, from: usize, to: isize) -> Self {
        match self.members.get(from) {
            Some(member) => self
                .reorder(&member.id, to)
                .unwrap_or_else(|_| self.clone()),
            None => self.clone(),
        }
    }

    /// Replaces (or clears, with `None`) the crop of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::NotFound`] if `id` is not a member and
    /// [`AttachmentError::Validation`] if `zoom <= 0`.
    pub fn set_crop(
        &self,
        id: &AttachmentId,
        crop: Option<CropData>,
    ) -> Result<Self, AttachmentError> {
        let index = self.require(id)?;
        if let Some(crop) = &crop {
            validate_crop(crop)?;
        }

        let mut members = self.members.clone();
        members[index].crop = crop;
        Ok(Self::normalized(members))
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Iterates members in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.members.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &AttachmentId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the display index of `id`.
    #[must_use]
    pub fn position(&self, id: &AttachmentId) -> Option<usize> {
        self.members.iter().position(|member| member.id == *id)
    }

    #[must_use]
    pub fn get(&self, id: &AttachmentId) -> Option<&Attachment> {
        self.members.iter().find(|member| member.id == *id)
    }

    /// Returns the primary member, if the collection is non-empty.
    #[must_use]
    pub fn primary(&self) -> Option<&Attachment> {
        self.members.iter().find(|member| member.is_primary)
    }

    /// Returns member ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<AttachmentId> {
        self.members.iter().map(|member| member.id.clone()).collect()
    }

    /// Returns the members as records, ready to hand back to persistence.
    #[must_use]
    pub fn into_records(self) -> Vec<Attachment> {
        self.members
    }

    /// Checks both collection rules. Always true for values built by this type.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let ranked = self
            .members
            .iter()
            .enumerate()
            .all(|(index, member)| usize::try_from(member.order).is_ok_and(|o| o == index));
        let primaries = self.members.iter().filter(|member| member.is_primary).count();
        ranked && primaries == usize::from(!self.members.is_empty())
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn require(&self, id: &AttachmentId) -> Result<usize, AttachmentError> {
        self.position(id)
            .ok_or_else(|| AttachmentError::NotFound(id.clone()))
    }

    /// Re-derives the ranking from vector position and guarantees a primary.
    fn normalized(mut members: Vec<Attachment>) -> Self {
        for (index, member) in members.iter_mut().enumerate() {
            member.order = u32::try_from(index).unwrap_or(u32::MAX);
        }
        if !members.iter().any(|member| member.is_primary) {
            if let Some(first) = members.first_mut() {
                first.is_primary = true;
            }
        }
        Self { members }
    }
}

impl<'a> IntoIterator for &'a AttachmentCollection {
    type Item = &'a Attachment;
    type IntoIter = std::slice::Iter<'a, Attachment>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

fn validate_crop(crop: &CropData) -> Result<(), ValidationError> {
    if crop.has_valid_zoom() {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveZoom(crop.zoom))
    }
}
