// src/triggers.rs

//! Static trigger-group tables.
//!
//! Each group is a fixed list of syscall labels. Enabling a group on
//! the command line pulls the ancestor-closure of every member present
//! in the graph into the kept output and gives the members a shared
//! fill color. Labels that do not occur in a given callgraph are
//! simply skipped at resolution time.

/// A named, statically declared list of node labels.
#[derive(Debug)]
pub struct TriggerGroup {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

pub static FILE_GROUP: TriggerGroup = TriggerGroup {
    name: "file",
    labels: &[
        "open", "openat", "creat", "close", "read", "write", "pread64", "pwrite64", "lseek",
        "stat", "fstat", "lstat", "statx", "access", "unlink", "unlinkat", "rename", "renameat",
        "mkdir", "rmdir", "chmod", "fchmod", "chown", "fchown", "truncate", "ftruncate", "fsync",
        "fdatasync", "fcntl", "dup", "dup2", "dup3", "getdents64", "readlink", "symlink", "link",
    ],
};

pub static NET_GROUP: TriggerGroup = TriggerGroup {
    name: "net",
    labels: &[
        "socket", "socketpair", "connect", "accept", "accept4", "bind", "listen", "send",
        "sendto", "sendmsg", "sendmmsg", "recv", "recvfrom", "recvmsg", "recvmmsg", "shutdown",
        "getsockname", "getpeername", "getsockopt", "setsockopt",
    ],
};

pub static PROC_GROUP: TriggerGroup = TriggerGroup {
    name: "proc",
    labels: &[
        "fork", "vfork", "clone", "clone3", "execve", "execveat", "exit", "exit_group", "wait4",
        "waitid", "waitpid", "kill", "tkill", "tgkill", "getpid", "getppid", "gettid", "ptrace",
        "setsid", "setpgid",
    ],
};

pub static MEM_GROUP: TriggerGroup = TriggerGroup {
    name: "mem",
    labels: &[
        "mmap", "mmap2", "munmap", "mremap", "mprotect", "madvise", "brk", "mlock", "mlock2",
        "munlock", "mlockall", "munlockall", "msync", "shmat", "shmdt", "shmget",
    ],
};
