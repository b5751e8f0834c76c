//! Built-in parameter tables for the MPI entry points the generator knows about.

/// Handle-array parameters and the parameter that holds their element count.
pub(super) static HANDLE_ARRAYS: &[(&str, &[(usize, usize)])] = &[
    ("MPI_Alltoallw", &[(3, 8), (7, 8)]),
    ("MPI_Startall", &[(1, 0)]),
    ("MPI_Testall", &[(1, 0), (3, 0)]),
    ("MPI_Testany", &[(1, 0)]),
    ("MPI_Testsome", &[(1, 0), (4, 0)]),
    ("MPI_Type_create_struct", &[(3, 0)]),
    ("MPI_Type_get_contents", &[(6, 1)]),
    ("MPI_Type_struct", &[(3, 0)]),
    ("MPI_Waitall", &[(1, 0), (2, 0)]),
    ("MPI_Waitany", &[(1, 0)]),
    ("MPI_Waitsome", &[(1, 0), (4, 0)]),
];

/// Parameters that receive a single array index (or `MPI_UNDEFINED`).
pub(super) static INDEX_OUTPUTS: &[(&str, usize)] = &[
    ("MPI_Testany", 2),
    ("MPI_Waitany", 2),
];

/// Parameters that receive an array of indices, paired with their count parameter.
pub(super) static INDEX_ARRAY_OUTPUTS: &[(&str, &[(usize, usize)])] = &[
    ("MPI_Testsome", &[(3, 2)]),
    ("MPI_Waitsome", &[(3, 2)]),
];

/// Positions read by each function before the call.
pub(super) static INPUTS: &[(&str, &[usize])] = &[
    ("MPI_Abort", &[0, 1]),
    ("MPI_Accumulate", &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
    ("MPI_Add_error_class", &[]),
    ("MPI_Add_error_code", &[0]),
    ("MPI_Add_error_string", &[0, 1]),
    ("MPI_Address", &[0]),
    ("MPI_Allgather", &[0, 1, 2, 4, 5, 6]),
    ("MPI_Allgatherv", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Alloc_mem", &[0, 1]),
    ("MPI_Allreduce", &[0, 2, 3, 4, 5]),
    ("MPI_Alltoall", &[0, 1, 2, 4, 5, 6]),
    ("MPI_Alltoallv", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Alltoallw", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Attr_delete", &[0, 1]),
    ("MPI_Attr_get", &[0, 1]),
    ("MPI_Attr_put", &[0, 1, 2]),
    ("MPI_Barrier", &[0]),
    ("MPI_Bcast", &[0, 1, 2, 3, 4]),
    ("MPI_Bsend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Bsend_init", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Buffer_attach", &[0, 1]),
    ("MPI_Buffer_detach", &[]),
    ("MPI_Cancel", &[0]),
    ("MPI_Cart_coords", &[0, 1, 2]),
    ("MPI_Cart_create", &[0, 1, 2, 3, 4]),
    ("MPI_Cart_get", &[0, 1]),
    ("MPI_Cart_map", &[0, 1, 2, 3]),
    ("MPI_Cart_rank", &[0, 1]),
    ("MPI_Cart_shift", &[0, 1, 2]),
    ("MPI_Cart_sub", &[0, 1]),
    ("MPI_Cartdim_get", &[0]),
    ("MPI_Close_port", &[0]),
    ("MPI_Comm_accept", &[0, 1, 2, 3]),
    ("MPI_Comm_call_errhandler", &[0, 1]),
    ("MPI_Comm_compare", &[0, 1]),
    ("MPI_Comm_connect", &[0, 1, 2, 3]),
    ("MPI_Comm_create", &[0, 1]),
    ("MPI_Comm_create_errhandler", &[0]),
    ("MPI_Comm_create_keyval", &[0, 1, 3]),
    ("MPI_Comm_delete_attr", &[1, 0]),
    ("MPI_Comm_disconnect", &[0]),
    ("MPI_Comm_dup", &[0]),
    ("MPI_Comm_free", &[0]),
    ("MPI_Comm_free_keyval", &[0]),
    ("MPI_Comm_get_attr", &[0, 1]),
    ("MPI_Comm_get_errhandler", &[0]),
    ("MPI_Comm_get_name", &[0]),
    ("MPI_Comm_get_parent", &[]),
    ("MPI_Comm_group", &[0]),
    ("MPI_Comm_join", &[0]),
    ("MPI_Comm_rank", &[0]),
    ("MPI_Comm_remote_group", &[0]),
    ("MPI_Comm_remote_size", &[0]),
    ("MPI_Comm_set_attr", &[1, 2, 0]),
    ("MPI_Comm_set_errhandler", &[0]),
    ("MPI_Comm_set_name", &[1, 0]),
    ("MPI_Comm_size", &[0]),
    ("MPI_Comm_spawn", &[0, 2, 3, 4, 5]),
    ("MPI_Comm_spawn_multiple", &[0, 5, 6]),
    ("MPI_Comm_split", &[0, 1, 2]),
    ("MPI_Comm_test_inter", &[0]),
    ("MPI_Dims_create", &[0, 1, 2]),
    ("MPI_Errhandler_create", &[0]),
    ("MPI_Errhandler_free", &[0]),
    ("MPI_Errhandler_get", &[0]),
    ("MPI_Errhandler_set", &[0, 1]),
    ("MPI_Error_class", &[0]),
    ("MPI_Error_string", &[0]),
    ("MPI_Exscan", &[0, 2, 3, 4, 5]),
    ("MPI_File_call_errhandler", &[0, 1]),
    ("MPI_File_close", &[0]),
    ("MPI_File_create_errhandler", &[0]),
    ("MPI_File_delete", &[0, 1]),
    ("MPI_File_get_amode", &[0]),
    ("MPI_File_get_atomicity", &[0]),
    ("MPI_File_get_byte_offset", &[0, 1]),
    ("MPI_File_get_errhandler", &[0]),
    ("MPI_File_get_group", &[0]),
    ("MPI_File_get_info", &[0]),
    ("MPI_File_get_position", &[0]),
    ("MPI_File_get_position_shared", &[0]),
    ("MPI_File_get_size", &[0, 1]),
    ("MPI_File_get_type_extent", &[0, 1]),
    ("MPI_File_get_view", &[0]),
    ("MPI_File_iread", &[2, 3, 0]),
    ("MPI_File_iread_at", &[0, 1, 3, 4]),
    ("MPI_File_iread_shared", &[2, 3, 0]),
    ("MPI_File_iwrite", &[1, 2, 3, 0]),
    ("MPI_File_iwrite_at", &[1, 2, 3, 4, 0]),
    ("MPI_File_iwrite_shared", &[2, 3, 0]),
    ("MPI_File_open", &[0, 1, 2, 3]),
    ("MPI_File_preallocate", &[1, 0]),
    ("MPI_File_read", &[0, 2, 3]),
    ("MPI_File_read_all", &[0, 2, 3]),
    ("MPI_File_read_all_begin", &[2, 3, 0]),
    ("MPI_File_read_all_end", &[0]),
    ("MPI_File_read_at", &[0, 1, 3, 4]),
    ("MPI_File_read_at_all", &[0, 1, 3, 4]),
    ("MPI_File_read_at_all_begin", &[0, 1, 3, 4]),
    ("MPI_File_read_at_all_end", &[0]),
    ("MPI_File_read_ordered", &[0, 2, 3]),
    ("MPI_File_read_ordered_begin", &[2, 3, 0]),
    ("MPI_File_read_ordered_end", &[0]),
    ("MPI_File_read_shared", &[2, 3, 0]),
    ("MPI_File_seek", &[0, 1, 2]),
    ("MPI_File_seek_shared", &[0, 1, 2]),
    ("MPI_File_set_atomicity", &[0, 1]),
    ("MPI_File_set_errhandler", &[1, 0]),
    ("MPI_File_set_info", &[1, 0]),
    ("MPI_File_set_size", &[0, 1]),
    ("MPI_File_set_view", &[1, 2, 3, 4, 5, 0]),
    ("MPI_File_sync", &[0]),
    ("MPI_File_write", &[1, 2, 3, 0]),
    ("MPI_File_write_all", &[0, 1, 2, 3]),
    ("MPI_File_write_all_begin", &[1, 2, 3, 0]),
    ("MPI_File_write_all_end", &[1, 0]),
    ("MPI_File_write_at", &[0, 1, 2, 3, 4]),
    ("MPI_File_write_at_all", &[0, 1, 2, 3, 4]),
    ("MPI_File_write_at_all_begin", &[1, 2, 3, 4, 0]),
    ("MPI_File_write_at_all_end", &[1, 0]),
    ("MPI_File_write_ordered", &[0, 1, 2, 3]),
    ("MPI_File_write_ordered_begin", &[1, 2, 3, 0]),
    ("MPI_File_write_ordered_end", &[1, 0]),
    ("MPI_File_write_shared", &[1, 2, 3, 0]),
    ("MPI_Finalize", &[]),
    ("MPI_Finalized", &[]),
    ("MPI_Free_mem", &[0]),
    ("MPI_Gather", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Gatherv", &[0, 1, 2, 4, 5, 6, 7, 8]),
    ("MPI_Get", &[0, 1, 2, 3, 4, 5, 6, 7]),
    ("MPI_Get_address", &[0]),
    ("MPI_Get_count", &[0, 1]),
    ("MPI_Get_elements", &[0, 1]),
    ("MPI_Get_processor_name", &[]),
    ("MPI_Get_version", &[]),
    ("MPI_Graph_create", &[0, 1, 2, 3, 4]),
    ("MPI_Graph_get", &[0, 1, 2]),
    ("MPI_Graph_map", &[0, 1, 2, 3]),
    ("MPI_Graph_neighbors", &[0, 1, 2]),
    ("MPI_Graph_neighbors_count", &[0, 1]),
    ("MPI_Graphdims_get", &[0]),
    ("MPI_Grequest_complete", &[0]),
    ("MPI_Grequest_start", &[0, 1, 2, 3]),
    ("MPI_Group_compare", &[0, 1]),
    ("MPI_Group_difference", &[0, 1]),
    ("MPI_Group_excl", &[0, 1, 2]),
    ("MPI_Group_free", &[0]),
    ("MPI_Group_incl", &[0, 1, 2]),
    ("MPI_Group_intersection", &[0, 1]),
    ("MPI_Group_range_excl", &[0, 1]),
    ("MPI_Group_range_incl", &[0, 1]),
    ("MPI_Group_rank", &[0]),
    ("MPI_Group_size", &[0]),
    ("MPI_Group_translate_ranks", &[0, 1, 2, 3]),
    ("MPI_Group_union", &[0, 1]),
    ("MPI_Iallgather", &[0, 1, 2, 4, 5, 6]),
    ("MPI_Iallgatherv", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Iallreduce", &[0, 2, 3, 4, 5]),
    ("MPI_Ialltoall", &[0, 1, 2, 4, 5, 6]),
    ("MPI_Ialltoallv", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Ialltoallw", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Ibarrier", &[0]),
    ("MPI_Ibcast", &[0, 1, 2, 3, 4]),
    ("MPI_Ibsend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Iexscan", &[0, 2, 3, 4, 5]),
    ("MPI_Igather", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Igatherv", &[0, 1, 2, 4, 5, 6, 7, 8]),
    ("MPI_Ineighbor_alltoallw", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Info_create", &[]),
    ("MPI_Info_delete", &[1, 0]),
    ("MPI_Info_dup", &[0]),
    ("MPI_Info_free", &[0]),
    ("MPI_Info_get", &[0, 1, 2]),
    ("MPI_Info_get_nkeys", &[0]),
    ("MPI_Info_get_nthkey", &[0, 1]),
    ("MPI_Info_get_valuelen", &[0, 1]),
    ("MPI_Info_set", &[1, 2, 0]),
    ("MPI_Init", &[0, 1]),
    ("MPI_Init_thread", &[0, 1, 2]),
    ("MPI_Initialized", &[]),
    ("MPI_Intercomm_create", &[0, 1, 2, 3, 4]),
    ("MPI_Intercomm_merge", &[0, 1]),
    ("MPI_Iprobe", &[0, 1, 2]),
    ("MPI_Irecv", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Ireduce", &[0, 2, 3, 4, 5, 6]),
    ("MPI_Ireduce_scatter", &[0, 2, 3, 4, 5]),
    ("MPI_Ireduce_scatter_block", &[0, 2, 3, 4, 5]),
    ("MPI_Irsend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Is_thread_main", &[]),
    ("MPI_Iscatter", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Iscatterv", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Isend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Issend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Keyval_create", &[0, 1, 3]),
    ("MPI_Keyval_free", &[0]),
    ("MPI_Lookup_name", &[0, 1]),
    ("MPI_Neighbor_allgather", &[0, 1, 2, 4, 5, 6]),
    ("MPI_Neighbor_allgatherv", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Neighbor_alltoall", &[0, 1, 2, 4, 5, 6]),
    ("MPI_Neighbor_alltoallv", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Neighbor_alltoallw", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Op_create", &[0, 1]),
    ("MPI_Op_free", &[0]),
    ("MPI_Open_port", &[0]),
    ("MPI_Pack", &[0, 1, 2, 4, 6, 5]),
    ("MPI_Pack_external", &[0, 1, 2, 3, 5, 6]),
    ("MPI_Pack_external_size", &[0, 1, 2]),
    ("MPI_Pack_size", &[0, 1, 2]),
    ("MPI_Pcontrol", &[0]),
    ("MPI_Probe", &[0, 1, 2]),
    ("MPI_Publish_name", &[0, 1, 2]),
    ("MPI_Put", &[0, 1, 2, 3, 4, 5, 6, 7]),
    ("MPI_Query_thread", &[]),
    ("MPI_Recv", &[1, 2, 3, 4, 5]),
    ("MPI_Recv_init", &[1, 2, 3, 4, 5, 0]),
    ("MPI_Reduce", &[0, 2, 3, 4, 5, 6]),
    ("MPI_Reduce_local", &[0, 2, 3, 4]),
    ("MPI_Reduce_scatter", &[0, 2, 3, 4, 5]),
    ("MPI_Register_datarep", &[0, 1, 2, 3, 4]),
    ("MPI_Request_free", &[0]),
    ("MPI_Request_get_status", &[0]),
    ("MPI_Rsend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Rsend_init", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Scan", &[0, 2, 3, 4, 5]),
    ("MPI_Scatter", &[0, 1, 2, 4, 5, 6, 7]),
    ("MPI_Scatterv", &[0, 1, 2, 3, 5, 6, 7, 8]),
    ("MPI_Send", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Send_init", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Sendrecv", &[0, 1, 2, 3, 4, 6, 7, 8, 9, 10]),
    ("MPI_Sendrecv_replace", &[1, 2, 3, 4, 5, 6, 7, 0]),
    ("MPI_Sizeof", &[]),
    ("MPI_Ssend", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Ssend_init", &[0, 1, 2, 3, 4, 5]),
    ("MPI_Start", &[0]),
    ("MPI_Startall", &[0, 1]),
    ("MPI_Status_set_cancelled", &[1, 0]),
    ("MPI_Status_set_elements", &[1, 2, 0]),
    ("MPI_Test", &[0]),
    ("MPI_Test_cancelled", &[0]),
    ("MPI_Testall", &[0, 1]),
    ("MPI_Testany", &[0, 1]),
    ("MPI_Testsome", &[0, 1]),
    ("MPI_Topo_test", &[0]),
    ("MPI_Type_commit", &[0]),
    ("MPI_Type_contiguous", &[0, 1]),
    ("MPI_Type_create_darray", &[0, 1, 2, 7, 8]),
    ("MPI_Type_create_hindexed", &[0, 3]),
    ("MPI_Type_create_hvector", &[0, 1, 2, 3]),
    ("MPI_Type_create_indexed_block", &[0, 1, 3]),
    ("MPI_Type_create_keyval", &[0, 1, 3]),
    ("MPI_Type_create_resized", &[0, 1, 2]),
    ("MPI_Type_create_struct", &[0]),
    ("MPI_Type_create_subarray", &[0, 4, 5]),
    ("MPI_Type_delete_attr", &[1, 0]),
    ("MPI_Type_dup", &[0]),
    ("MPI_Type_extent", &[0]),
    ("MPI_Type_free", &[0]),
    ("MPI_Type_free_keyval", &[0]),
    ("MPI_Type_get_attr", &[0, 1]),
    ("MPI_Type_get_contents", &[0, 1, 2, 3]),
    ("MPI_Type_get_envelope", &[0]),
    ("MPI_Type_get_extent", &[0]),
    ("MPI_Type_get_name", &[0]),
    ("MPI_Type_get_true_extent", &[0]),
    ("MPI_Type_hindexed", &[0, 1, 2, 3]),
    ("MPI_Type_hvector", &[0, 1, 2, 3]),
    ("MPI_Type_indexed", &[0, 1, 2, 3]),
    ("MPI_Type_lb", &[0]),
    ("MPI_Type_match_size", &[0, 1]),
    ("MPI_Type_set_attr", &[1, 2, 0]),
    ("MPI_Type_set_name", &[1, 0]),
    ("MPI_Type_size", &[0]),
    ("MPI_Type_struct", &[0, 1, 2, 3]),
    ("MPI_Type_ub", &[0]),
    ("MPI_Type_vector", &[0, 1, 2, 3]),
    ("MPI_Unpack", &[0, 1, 4, 5, 6, 2]),
    ("MPI_Unpack_external", &[0, 1, 2, 5, 6, 3]),
    ("MPI_Unpublish_name", &[0, 1, 2]),
    ("MPI_Wait", &[0]),
    ("MPI_Waitall", &[0, 1]),
    ("MPI_Waitany", &[0, 1]),
    ("MPI_Waitsome", &[0, 1]),
    ("MPI_Win_allocate", &[0, 1, 2, 3]),
    ("MPI_Win_allocate_shared", &[0, 1, 2, 3]),
    ("MPI_Win_attach", &[0, 1, 2]),
    ("MPI_Win_call_errhandler", &[0, 1]),
    ("MPI_Win_complete", &[0]),
    ("MPI_Win_create", &[0, 1, 2, 3, 4]),
    ("MPI_Win_create_dynamic", &[0, 1]),
    ("MPI_Win_create_errhandler", &[0]),
    ("MPI_Win_create_keyval", &[0, 1, 3]),
    ("MPI_Win_delete_attr", &[1, 0]),
    ("MPI_Win_detach", &[0, 1]),
    ("MPI_Win_fence", &[0, 1]),
    ("MPI_Win_flush", &[0, 1]),
    ("MPI_Win_flush_all", &[0]),
    ("MPI_Win_flush_local", &[0, 1]),
    ("MPI_Win_flush_local_all", &[0]),
    ("MPI_Win_free", &[0]),
    ("MPI_Win_free_keyval", &[0]),
    ("MPI_Win_get_attr", &[0, 1]),
    ("MPI_Win_get_errhandler", &[0]),
    ("MPI_Win_get_group", &[0]),
    ("MPI_Win_get_info", &[0]),
    ("MPI_Win_get_name", &[0]),
    ("MPI_Win_lock", &[0, 1, 2, 3]),
    ("MPI_Win_lock_all", &[0, 1]),
    ("MPI_Win_post", &[0, 1, 2]),
    ("MPI_Win_set_attr", &[1, 2, 0]),
    ("MPI_Win_set_errhandler", &[1, 0]),
    ("MPI_Win_set_info", &[0, 1]),
    ("MPI_Win_set_name", &[1, 0]),
    ("MPI_Win_shared_query", &[0, 1]),
    ("MPI_Win_start", &[0, 1, 2]),
    ("MPI_Win_sync", &[0]),
    ("MPI_Win_test", &[0]),
    ("MPI_Win_unlock", &[0, 1]),
    ("MPI_Win_unlock_all", &[0]),
    ("MPI_Win_wait", &[0]),
    ("MPI_Wtick", &[]),
    ("MPI_Wtime", &[]),
];

/// Positions written by each function.
pub(super) static OUTPUTS: &[(&str, &[usize])] = &[
    ("MPI_Abort", &[]),
    ("MPI_Accumulate", &[]),
    ("MPI_Add_error_class", &[0]),
    ("MPI_Add_error_code", &[1]),
    ("MPI_Add_error_string", &[]),
    ("MPI_Address", &[1]),
    ("MPI_Allgather", &[3]),
    ("MPI_Allgatherv", &[3]),
    ("MPI_Alloc_mem", &[2]),
    ("MPI_Allreduce", &[1]),
    ("MPI_Alltoall", &[3]),
    ("MPI_Alltoallv", &[4]),
    ("MPI_Alltoallw", &[4]),
    ("MPI_Attr_delete", &[]),
    ("MPI_Attr_get", &[2, 3]),
    ("MPI_Attr_put", &[]),
    ("MPI_Barrier", &[]),
    ("MPI_Bcast", &[]),
    ("MPI_Bsend", &[]),
    ("MPI_Bsend_init", &[6]),
    ("MPI_Buffer_attach", &[]),
    ("MPI_Buffer_detach", &[0, 1]),
    ("MPI_Cancel", &[]),
    ("MPI_Cart_coords", &[3]),
    ("MPI_Cart_create", &[5]),
    ("MPI_Cart_get", &[2, 3, 4]),
    ("MPI_Cart_map", &[4]),
    ("MPI_Cart_rank", &[2]),
    ("MPI_Cart_shift", &[3, 4]),
    ("MPI_Cart_sub", &[2]),
    ("MPI_Cartdim_get", &[1]),
    ("MPI_Close_port", &[]),
    ("MPI_Comm_accept", &[4]),
    ("MPI_Comm_call_errhandler", &[]),
    ("MPI_Comm_compare", &[2]),
    ("MPI_Comm_connect", &[4]),
    ("MPI_Comm_create", &[2]),
    ("MPI_Comm_create_errhandler", &[1]),
    ("MPI_Comm_create_keyval", &[2]),
    ("MPI_Comm_delete_attr", &[0]),
    ("MPI_Comm_disconnect", &[0]),
    ("MPI_Comm_dup", &[1]),
    ("MPI_Comm_free", &[]),
    ("MPI_Comm_free_keyval", &[0]),
    ("MPI_Comm_get_attr", &[2, 3]),
    ("MPI_Comm_get_errhandler", &[1]),
    ("MPI_Comm_get_name", &[1, 2]),
    ("MPI_Comm_get_parent", &[0]),
    ("MPI_Comm_group", &[1]),
    ("MPI_Comm_join", &[1]),
    ("MPI_Comm_rank", &[1]),
    ("MPI_Comm_remote_group", &[1]),
    ("MPI_Comm_remote_size", &[1]),
    ("MPI_Comm_set_attr", &[0]),
    ("MPI_Comm_set_errhandler", &[1, 0]),
    ("MPI_Comm_set_name", &[0]),
    ("MPI_Comm_size", &[1]),
    ("MPI_Comm_spawn", &[6]),
    ("MPI_Comm_spawn_multiple", &[7]),
    ("MPI_Comm_split", &[3]),
    ("MPI_Comm_test_inter", &[]),
    ("MPI_Dims_create", &[]),
    ("MPI_Errhandler_create", &[1]),
    ("MPI_Errhandler_free", &[]),
    ("MPI_Errhandler_get", &[1]),
    ("MPI_Errhandler_set", &[]),
    ("MPI_Error_class", &[1]),
    ("MPI_Error_string", &[1, 2]),
    ("MPI_Exscan", &[1]),
    ("MPI_File_call_errhandler", &[]),
    ("MPI_File_close", &[0]),
    ("MPI_File_create_errhandler", &[1]),
    ("MPI_File_delete", &[]),
    ("MPI_File_get_amode", &[1]),
    ("MPI_File_get_atomicity", &[1]),
    ("MPI_File_get_byte_offset", &[2]),
    ("MPI_File_get_errhandler", &[1]),
    ("MPI_File_get_group", &[1]),
    ("MPI_File_get_info", &[1]),
    ("MPI_File_get_position", &[1]),
    ("MPI_File_get_position_shared", &[1]),
    ("MPI_File_get_size", &[]),
    ("MPI_File_get_type_extent", &[2]),
    ("MPI_File_get_view", &[1, 2, 3, 4]),
    ("MPI_File_iread", &[1, 4, 0]),
    ("MPI_File_iread_at", &[2, 5]),
    ("MPI_File_iread_shared", &[1, 4, 0]),
    ("MPI_File_iwrite", &[4, 0]),
    ("MPI_File_iwrite_at", &[5, 0]),
    ("MPI_File_iwrite_shared", &[1, 4, 0]),
    ("MPI_File_open", &[4]),
    ("MPI_File_preallocate", &[0]),
    ("MPI_File_read", &[1, 4]),
    ("MPI_File_read_all", &[1, 4]),
    ("MPI_File_read_all_begin", &[1, 0]),
    ("MPI_File_read_all_end", &[1, 2, 0]),
    ("MPI_File_read_at", &[2, 5]),
    ("MPI_File_read_at_all", &[2, 5]),
    ("MPI_File_read_at_all_begin", &[2]),
    ("MPI_File_read_at_all_end", &[1, 2]),
    ("MPI_File_read_ordered", &[1, 4]),
    ("MPI_File_read_ordered_begin", &[1, 0]),
    ("MPI_File_read_ordered_end", &[1, 2, 0]),
    ("MPI_File_read_shared", &[1, 4, 0]),
    ("MPI_File_seek", &[]),
    ("MPI_File_seek_shared", &[]),
    ("MPI_File_set_atomicity", &[]),
    ("MPI_File_set_errhandler", &[0]),
    ("MPI_File_set_info", &[0]),
    ("MPI_File_set_size", &[]),
    ("MPI_File_set_view", &[0]),
    ("MPI_File_sync", &[]),
    ("MPI_File_write", &[4, 0]),
    ("MPI_File_write_all", &[4]),
    ("MPI_File_write_all_begin", &[0]),
    ("MPI_File_write_all_end", &[2, 0]),
    ("MPI_File_write_at", &[5]),
    ("MPI_File_write_at_all", &[5]),
    ("MPI_File_write_at_all_begin", &[0]),
    ("MPI_File_write_at_all_end", &[2, 0]),
    ("MPI_File_write_ordered", &[4]),
    ("MPI_File_write_ordered_begin", &[0]),
    ("MPI_File_write_ordered_end", &[2, 0]),
    ("MPI_File_write_shared", &[4, 0]),
    ("MPI_Finalize", &[]),
    ("MPI_Finalized", &[0]),
    ("MPI_Free_mem", &[]),
    ("MPI_Gather", &[3]),
    ("MPI_Gatherv", &[3]),
    ("MPI_Get", &[]),
    ("MPI_Get_address", &[1]),
    ("MPI_Get_count", &[2]),
    ("MPI_Get_elements", &[]),
    ("MPI_Get_processor_name", &[0, 1]),
    ("MPI_Get_version", &[0, 1]),
    ("MPI_Graph_create", &[5]),
    ("MPI_Graph_get", &[3, 4]),
    ("MPI_Graph_map", &[4]),
    ("MPI_Graph_neighbors", &[3]),
    ("MPI_Graph_neighbors_count", &[2]),
    ("MPI_Graphdims_get", &[1, 2]),
    ("MPI_Grequest_complete", &[0]),
    ("MPI_Grequest_start", &[4]),
    ("MPI_Group_compare", &[2]),
    ("MPI_Group_difference", &[2]),
    ("MPI_Group_excl", &[3]),
    ("MPI_Group_free", &[0]),
    ("MPI_Group_incl", &[3]),
    ("MPI_Group_intersection", &[2]),
    ("MPI_Group_range_excl", &[3]),
    ("MPI_Group_range_incl", &[3]),
    ("MPI_Group_rank", &[1]),
    ("MPI_Group_size", &[1]),
    ("MPI_Group_translate_ranks", &[4]),
    ("MPI_Group_union", &[2]),
    ("MPI_Iallgather", &[3, 7]),
    ("MPI_Iallgatherv", &[3, 8]),
    ("MPI_Iallreduce", &[1, 6]),
    ("MPI_Ialltoall", &[3, 7]),
    ("MPI_Ialltoallv", &[4, 9]),
    ("MPI_Ialltoallw", &[4, 9]),
    ("MPI_Ibarrier", &[1]),
    ("MPI_Ibcast", &[5]),
    ("MPI_Ibsend", &[6]),
    ("MPI_Iexscan", &[1, 6]),
    ("MPI_Igather", &[3, 8]),
    ("MPI_Igatherv", &[3, 9]),
    ("MPI_Ineighbor_alltoallw", &[4, 9]),
    ("MPI_Info_create", &[0]),
    ("MPI_Info_delete", &[0]),
    ("MPI_Info_dup", &[1]),
    ("MPI_Info_free", &[0]),
    ("MPI_Info_get", &[3, 4]),
    ("MPI_Info_get_nkeys", &[1]),
    ("MPI_Info_get_nthkey", &[2]),
    ("MPI_Info_get_valuelen", &[2, 3]),
    ("MPI_Info_set", &[0]),
    ("MPI_Init", &[]),
    ("MPI_Init_thread", &[3]),
    ("MPI_Initialized", &[0]),
    ("MPI_Intercomm_create", &[5]),
    ("MPI_Intercomm_merge", &[5]),
    ("MPI_Iprobe", &[3, 4]),
    ("MPI_Irecv", &[6]),
    ("MPI_Ireduce", &[1, 7]),
    ("MPI_Ireduce_scatter", &[1, 6]),
    ("MPI_Ireduce_scatter_block", &[1, 6]),
    ("MPI_Irsend", &[6]),
    ("MPI_Is_thread_main", &[0]),
    ("MPI_Iscatter", &[3, 8]),
    ("MPI_Iscatterv", &[4, 9]),
    ("MPI_Isend", &[6]),
    ("MPI_Issend", &[6]),
    ("MPI_Keyval_create", &[2]),
    ("MPI_Keyval_free", &[]),
    ("MPI_Lookup_name", &[2]),
    ("MPI_Neighbor_allgather", &[3]),
    ("MPI_Neighbor_allgatherv", &[3]),
    ("MPI_Neighbor_alltoall", &[3]),
    ("MPI_Neighbor_alltoallv", &[4]),
    ("MPI_Neighbor_alltoallw", &[4]),
    ("MPI_Op_create", &[2]),
    ("MPI_Op_free", &[0]),
    ("MPI_Open_port", &[1]),
    ("MPI_Pack", &[3, 5]),
    ("MPI_Pack_external", &[4, 6]),
    ("MPI_Pack_external_size", &[3]),
    ("MPI_Pack_size", &[3]),
    ("MPI_Pcontrol", &[]),
    ("MPI_Probe", &[3]),
    ("MPI_Publish_name", &[]),
    ("MPI_Put", &[]),
    ("MPI_Query_thread", &[0]),
    ("MPI_Recv", &[0, 6]),
    ("MPI_Recv_init", &[6, 0]),
    ("MPI_Reduce", &[1]),
    ("MPI_Reduce_local", &[1]),
    ("MPI_Reduce_scatter", &[1]),
    ("MPI_Register_datarep", &[]),
    ("MPI_Request_free", &[0]),
    ("MPI_Request_get_status", &[1, 2]),
    ("MPI_Rsend", &[]),
    ("MPI_Rsend_init", &[6]),
    ("MPI_Scan", &[1]),
    ("MPI_Scatter", &[3]),
    ("MPI_Scatterv", &[4]),
    ("MPI_Send", &[]),
    ("MPI_Send_init", &[6]),
    ("MPI_Sendrecv", &[5, 11]),
    ("MPI_Sendrecv_replace", &[8, 0]),
    ("MPI_Sizeof", &[]),
    ("MPI_Ssend", &[]),
    ("MPI_Ssend_init", &[6]),
    ("MPI_Start", &[]),
    ("MPI_Startall", &[1]),
    ("MPI_Status_set_cancelled", &[0]),
    ("MPI_Status_set_elements", &[0]),
    ("MPI_Test", &[1, 2]),
    ("MPI_Test_cancelled", &[1]),
    ("MPI_Testall", &[1, 2, 3]),
    ("MPI_Testany", &[1, 2, 3, 4]),
    ("MPI_Testsome", &[1, 2, 3, 4]),
    ("MPI_Topo_test", &[1]),
    ("MPI_Type_commit", &[]),
    ("MPI_Type_contiguous", &[2]),
    ("MPI_Type_create_darray", &[9]),
    ("MPI_Type_create_hindexed", &[4]),
    ("MPI_Type_create_hvector", &[4]),
    ("MPI_Type_create_indexed_block", &[4]),
    ("MPI_Type_create_keyval", &[2]),
    ("MPI_Type_create_resized", &[3]),
    ("MPI_Type_create_struct", &[4]),
    ("MPI_Type_create_subarray", &[6]),
    ("MPI_Type_delete_attr", &[0]),
    ("MPI_Type_dup", &[1]),
    ("MPI_Type_extent", &[1]),
    ("MPI_Type_free", &[0]),
    ("MPI_Type_free_keyval", &[0]),
    ("MPI_Type_get_attr", &[2, 3]),
    ("MPI_Type_get_contents", &[]),
    ("MPI_Type_get_envelope", &[1, 2, 3, 4]),
    ("MPI_Type_get_extent", &[1, 2]),
    ("MPI_Type_get_name", &[1, 2]),
    ("MPI_Type_get_true_extent", &[1, 2]),
    ("MPI_Type_hindexed", &[4]),
    ("MPI_Type_hvector", &[4]),
    ("MPI_Type_indexed", &[4]),
    ("MPI_Type_lb", &[1]),
    ("MPI_Type_match_size", &[2]),
    ("MPI_Type_set_attr", &[0]),
    ("MPI_Type_set_name", &[0]),
    ("MPI_Type_size", &[1]),
    ("MPI_Type_struct", &[4]),
    ("MPI_Type_ub", &[1]),
    ("MPI_Type_vector", &[4]),
    ("MPI_Unpack", &[3, 2]),
    ("MPI_Unpack_external", &[4, 3]),
    ("MPI_Unpublish_name", &[]),
    ("MPI_Wait", &[0, 1]),
    ("MPI_Waitall", &[1, 2]),
    ("MPI_Waitany", &[1, 2, 3]),
    ("MPI_Waitsome", &[1, 2, 3, 4]),
    ("MPI_Win_allocate", &[4, 5]),
    ("MPI_Win_allocate_shared", &[4, 5]),
    ("MPI_Win_attach", &[]),
    ("MPI_Win_call_errhandler", &[]),
    ("MPI_Win_complete", &[]),
    ("MPI_Win_create", &[5]),
    ("MPI_Win_create_dynamic", &[2]),
    ("MPI_Win_create_errhandler", &[1]),
    ("MPI_Win_create_keyval", &[2]),
    ("MPI_Win_delete_attr", &[0]),
    ("MPI_Win_detach", &[]),
    ("MPI_Win_fence", &[]),
    ("MPI_Win_flush", &[]),
    ("MPI_Win_flush_all", &[]),
    ("MPI_Win_flush_local", &[]),
    ("MPI_Win_flush_local_all", &[]),
    ("MPI_Win_free", &[0]),
    ("MPI_Win_free_keyval", &[0]),
    ("MPI_Win_get_attr", &[2, 3]),
    ("MPI_Win_get_errhandler", &[1]),
    ("MPI_Win_get_group", &[1]),
    ("MPI_Win_get_info", &[1]),
    ("MPI_Win_get_name", &[1, 2]),
    ("MPI_Win_lock", &[]),
    ("MPI_Win_lock_all", &[]),
    ("MPI_Win_post", &[]),
    ("MPI_Win_set_attr", &[0]),
    ("MPI_Win_set_errhandler", &[0]),
    ("MPI_Win_set_info", &[]),
    ("MPI_Win_set_name", &[0]),
    ("MPI_Win_shared_query", &[2, 3, 4]),
    ("MPI_Win_start", &[]),
    ("MPI_Win_sync", &[]),
    ("MPI_Win_test", &[1]),
    ("MPI_Win_unlock", &[]),
    ("MPI_Win_unlock_all", &[]),
    ("MPI_Win_wait", &[]),
    ("MPI_Wtick", &[]),
    ("MPI_Wtime", &[]),
];
